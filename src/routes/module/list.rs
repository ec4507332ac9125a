use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::policy::{module as module_policy, Action};
use crate::types::module::ModuleRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::resolve_principal;

/// Every module, not only the caller's own. Ownership narrows writes, not
/// the catalogue.
#[get("")]
pub async fn list(
    _req: actix_web::HttpRequest,
    auth: Option<BearerAuth>,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Vec<ModuleRes>> {
    let principal = resolve_principal(&db, auth.as_ref()).await?;
    module_policy::access(&principal, Action::List).into_result()?;

    let rows = db.list_modules_with_owners().await?;
    let modules = rows
        .iter()
        .filter_map(|(module, owner)| {
            owner.as_ref().map(|owner| ModuleRes::from_parts(module, owner))
        })
        .collect();

    Ok(ApiResponse::Ok(modules))
}
