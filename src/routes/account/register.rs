use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::notify::{Notice, Notifier};
use crate::types::account::{DBAccountCreate, RAccountRegister};
use crate::types::error::{AppError, FieldErrors, REQUIRED_FIELD_MESSAGE};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::TokenType;
use crate::utils::token::{encrypt, new_token};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub id: Uuid,
    pub message: String,
}

/// Open endpoint: anyone may sign up. The account starts inactive, the
/// activation code goes out by mail and only its hash is kept.
#[post("/register")]
pub async fn register(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    notifier: web::Data<Notifier>,
    body: web::Json<RAccountRegister>,
) -> ApiResult<Response> {
    let body = body.into_inner();

    let (email, password) = match (body.email, body.password) {
        (Some(email), Some(password)) => (email, password),
        (email, password) => {
            let mut errors = FieldErrors::new();
            if email.is_none() {
                errors.push("email", REQUIRED_FIELD_MESSAGE);
            }
            if password.is_none() {
                errors.push("password", REQUIRED_FIELD_MESSAGE);
            }
            return Err(AppError::Validation(errors));
        }
    };

    let activation_code = new_token(TokenType::Activation);
    let activation_hash = encrypt(&activation_code)
        .map_err(|_| AppError::Internal("activation code hashing failed".into()))?;
    let password_hash =
        encrypt(&password).map_err(|_| AppError::Internal("password hashing failed".into()))?;

    let account_id = db
        .create_account(DBAccountCreate {
            email: email.clone(),
            password_hash,
            first_name: body.first_name,
            last_name: body.last_name,
            phone: body.phone,
            city: body.city,
            is_active: false,
            is_staff: false,
            is_superuser: false,
            activation_hash: Some(activation_hash),
        })
        .await?;

    notifier.notify(Notice::ActivationCode {
        email: email.clone(),
        account_id,
        code: activation_code,
    });

    info!("account {account_id} registered, activation pending");

    Ok(ApiResponse::Created(Response {
        id: account_id,
        message: "Аккаунт зарегистрирован. Проверьте почту для активации.".to_string(),
    }))
}
