use actix_web::{delete, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::policy::{module as module_policy, Action};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::resolve_principal;

#[derive(serde::Serialize, serde::Deserialize)]
pub struct Response {}

/// Owner or superuser. Everyone else gets 403, unknown ids 404.
#[delete("/delete/{id}")]
pub async fn delete(
    _req: actix_web::HttpRequest,
    auth: Option<BearerAuth>,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<Response> {
    let principal = resolve_principal(&db, auth.as_ref()).await?;
    module_policy::access(&principal, Action::Delete).into_result()?;

    let id = path.into_inner();
    let module = db.get_module(&id).await?;
    module_policy::object_access(&principal, Action::Delete, &module).into_result()?;

    db.delete_module(&id).await?;

    info!("module {id} deleted");

    Ok(ApiResponse::NoContent)
}
