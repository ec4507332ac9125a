use actix_web::{route, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::policy::{module as module_policy, Action};
use crate::types::error::AppError;
use crate::types::module::{ModuleRes, RModuleUpdate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::resolve_principal;
use crate::validation::{check_title_length, TitleValidator};

/// Owner-only edit. A title, when present, goes through the same checks as
/// at creation. Ownership itself is not editable.
#[route("/update/{id}", method = "PATCH", method = "PUT")]
pub async fn update(
    _req: actix_web::HttpRequest,
    auth: Option<BearerAuth>,
    db: web::Data<Arc<PostgresService>>,
    validator: web::Data<TitleValidator>,
    path: web::Path<Uuid>,
    body: web::Json<RModuleUpdate>,
) -> ApiResult<ModuleRes> {
    let principal = resolve_principal(&db, auth.as_ref()).await?;
    module_policy::access(&principal, Action::Update).into_result()?;

    let id = path.into_inner();
    let module = db.get_module(&id).await?;
    module_policy::object_access(&principal, Action::Update, &module).into_result()?;

    let patch = body.into_inner();
    if let Some(title) = patch.title.as_deref() {
        check_title_length(title).map_err(AppError::Validation)?;
        validator.check(title).map_err(AppError::Validation)?;
    }

    let updated = db.update_module(&id, patch).await?;
    let owner = db.get_account_by_id(&updated.owner_id).await?;

    info!("module {id} updated");

    Ok(ApiResponse::Ok(ModuleRes::from_parts(&updated, &owner)))
}
