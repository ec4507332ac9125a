use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::policy::{account as account_policy, Action};
use crate::types::account::AccountRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::resolve_principal;

/// Full profile, self only. Unknown ids are 404, someone else's id is 403.
#[get("/{id}")]
pub async fn retrieve(
    _req: actix_web::HttpRequest,
    auth: Option<BearerAuth>,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<AccountRes> {
    let principal = resolve_principal(&db, auth.as_ref()).await?;
    account_policy::access(&principal, Action::Retrieve).into_result()?;

    let target = db.get_account_by_id(&path.into_inner()).await?;
    account_policy::object_access(&principal, Action::Retrieve, &target).into_result()?;

    Ok(ApiResponse::Ok(AccountRes::from(&target)))
}
