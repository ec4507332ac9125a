use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::db::postgres_service::PostgresService;
use crate::types::account::RTokenObtain;
use crate::types::error::{AppError, FieldErrors, REQUIRED_FIELD_MESSAGE};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::{construct_token, TokenType};
use crate::utils::token::{encrypt, new_token, verify};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub token: String,
}

/// Password login. Every call mints a fresh bearer secret and stores only
/// its hash, which retires whatever token was issued before. Wrong email,
/// wrong password and an inactive account all look the same: 401.
#[post("/token")]
pub async fn token(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RTokenObtain>,
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

    let account = match db.get_account_by_email(&email).await {
        Ok(account) => account,
        Err(AppError::NotFound) => return Err(AppError::Unauthorized),
        Err(e) => return Err(e),
    };

    if !verify(&password, &account.password_hash).unwrap_or(false) {
        return Err(AppError::Unauthorized);
    }
    if !account.is_active {
        return Err(AppError::Unauthorized);
    }

    let secret = new_token(TokenType::User);
    let auth_hash =
        encrypt(&secret).map_err(|_| AppError::Internal("token hashing failed".into()))?;
    db.set_auth_hash(&account.id, auth_hash).await?;

    info!("token issued for account {}", account.id);

    Ok(ApiResponse::Ok(Response {
        token: construct_token(&account.id, &secret),
    }))
}
