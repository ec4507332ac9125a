use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::policy::{module as module_policy, Action};
use crate::types::module::ModuleRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::resolve_principal;

/// Detail view is owner only. A foreign module answers 403, a missing id
/// 404.
#[get("/{id}")]
pub async fn retrieve(
    _req: actix_web::HttpRequest,
    auth: Option<BearerAuth>,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<ModuleRes> {
    let principal = resolve_principal(&db, auth.as_ref()).await?;
    module_policy::access(&principal, Action::Retrieve).into_result()?;

    let module = db.get_module(&path.into_inner()).await?;
    module_policy::object_access(&principal, Action::Retrieve, &module).into_result()?;

    let owner = db.get_account_by_id(&module.owner_id).await?;
    Ok(ApiResponse::Ok(ModuleRes::from_parts(&module, &owner)))
}
