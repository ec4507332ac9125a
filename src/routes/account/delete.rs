use actix_web::{delete, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::policy::{account as account_policy, Action};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::resolve_principal;

#[derive(serde::Serialize, serde::Deserialize)]
pub struct Response {}

/// Staff only. Owned modules go with the account via the FK cascade.
#[delete("/delete/{id}")]
pub async fn delete(
    _req: actix_web::HttpRequest,
    auth: Option<BearerAuth>,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<Response> {
    let principal = resolve_principal(&db, auth.as_ref()).await?;
    account_policy::access(&principal, Action::Delete).into_result()?;

    let id = path.into_inner();
    let target = db.get_account_by_id(&id).await?;
    account_policy::object_access(&principal, Action::Delete, &target).into_result()?;

    db.delete_account(&id).await?;

    info!("account {id} deleted");

    Ok(ApiResponse::NoContent)
}
