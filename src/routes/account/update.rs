use actix_web::{route, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::policy::{account as account_policy, Action};
use crate::types::account::{AccountRes, RAccountUpdate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::resolve_principal;

/// Partial profile update, self only. Absent fields stay as they are, an
/// email change must not collide with another account.
#[route("/update/{id}", method = "PATCH", method = "PUT")]
pub async fn update(
    _req: actix_web::HttpRequest,
    auth: Option<BearerAuth>,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RAccountUpdate>,
) -> ApiResult<AccountRes> {
    let principal = resolve_principal(&db, auth.as_ref()).await?;
    account_policy::access(&principal, Action::Update).into_result()?;

    let id = path.into_inner();
    let target = db.get_account_by_id(&id).await?;
    account_policy::object_access(&principal, Action::Update, &target).into_result()?;

    let updated = db.update_account(&id, body.into_inner()).await?;

    info!("account {id} updated");

    Ok(ApiResponse::Ok(AccountRes::from(&updated)))
}
