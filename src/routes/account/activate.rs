use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::account::RAccountActivate;
use crate::types::error::{AppError, FieldErrors, REQUIRED_FIELD_MESSAGE};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::verify;

const BAD_UID_MESSAGE: &str = "Недопустимый ID пользователя или пользователь не существует.";
const BAD_CODE_MESSAGE: &str = "Недопустимый токен для данного пользователя.";

#[derive(Serialize, Deserialize)]
pub struct Response {}

/// Open endpoint: redeem the mailed one-time code. On success the account
/// becomes active and the code stops working.
#[post("/activate")]
pub async fn activate(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RAccountActivate>,
) -> ApiResult<Response> {
    let body = body.into_inner();

    let (uid, code) = match (body.uid, body.token) {
        (Some(uid), Some(code)) => (uid, code),
        (uid, code) => {
            let mut errors = FieldErrors::new();
            if uid.is_none() {
                errors.push("uid", REQUIRED_FIELD_MESSAGE);
            }
            if code.is_none() {
                errors.push("token", REQUIRED_FIELD_MESSAGE);
            }
            return Err(AppError::Validation(errors));
        }
    };

    let uid = Uuid::parse_str(&uid)
        .map_err(|_| AppError::Validation(FieldErrors::single("uid", BAD_UID_MESSAGE)))?;

    let account = match db.get_account_by_id(&uid).await {
        Ok(account) => account,
        Err(AppError::NotFound) => {
            return Err(AppError::Validation(FieldErrors::single("uid", BAD_UID_MESSAGE)))
        }
        Err(e) => return Err(e),
    };

    // Already active accounts have no hash left, their code is spent.
    let Some(stored) = account.activation_hash.as_deref() else {
        return Err(AppError::Validation(FieldErrors::single("token", BAD_CODE_MESSAGE)));
    };
    if !verify(&code, stored).unwrap_or(false) {
        return Err(AppError::Validation(FieldErrors::single("token", BAD_CODE_MESSAGE)));
    }

    db.activate_account(&account.id).await?;

    info!("account {} activated", account.id);

    Ok(ApiResponse::NoContent)
}
