use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::db::postgres_service::PostgresService;
use crate::policy::Principal;
use crate::types::error::AppError;
use crate::types::token::split_token;
use crate::utils::token;

/// Turn the request's bearer credential into a Principal.
///
/// No credential at all is a legitimate Anonymous principal (the policy
/// decides what it may do). A credential that is present but does not
/// check out is always 401: garbage encoding, unknown account, stale or
/// missing secret, or a deactivated account.
pub async fn resolve_principal(
    db: &PostgresService,
    auth: Option<&BearerAuth>,
) -> Result<Principal, AppError> {
    let Some(auth) = auth else {
        return Ok(Principal::Anonymous);
    };

    let (account_id, secret) = match split_token(auth.token()) {
        Some(parts) => parts,
        None => return Err(AppError::Unauthorized),
    };

    let account = match db.get_account_by_id(&account_id).await {
        Ok(account) => account,
        Err(_) => return Err(AppError::Unauthorized),
    };

    let Some(stored) = account.auth_hash.as_deref() else {
        return Err(AppError::Unauthorized);
    };
    if !token::verify(&secret, stored).unwrap_or(false) {
        return Err(AppError::Unauthorized);
    }
    if !account.is_active {
        return Err(AppError::Unauthorized);
    }

    Ok(Principal::from_account(&account))
}
