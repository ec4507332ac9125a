use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::policy::{account as account_policy, Action};
use crate::types::account::AccountSummary;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::resolve_principal;

/// Any signed-in account sees the roster, but only in the limited shape.
#[get("")]
pub async fn list(
    _req: actix_web::HttpRequest,
    auth: Option<BearerAuth>,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Vec<AccountSummary>> {
    let principal = resolve_principal(&db, auth.as_ref()).await?;
    account_policy::access(&principal, Action::List).into_result()?;

    let accounts = db.list_accounts().await?;
    Ok(ApiResponse::Ok(
        accounts.iter().map(AccountSummary::from).collect(),
    ))
}
