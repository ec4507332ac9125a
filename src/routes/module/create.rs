use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::notify::{Notice, Notifier};
use crate::ownership::{resolve_owner, OwnerChoice};
use crate::policy::{module as module_policy, Action};
use crate::types::error::{AppError, FieldErrors, REQUIRED_FIELD_MESSAGE};
use crate::types::module::{DBModuleCreate, RModuleCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::resolve_principal;
use crate::validation::{check_title_length, TitleValidator};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Owner as an email, unlike the nested shape the read endpoints use.
    pub owner: String,
}

#[post("/create")]
pub async fn create(
    _req: actix_web::HttpRequest,
    auth: Option<BearerAuth>,
    db: web::Data<Arc<PostgresService>>,
    validator: web::Data<TitleValidator>,
    notifier: web::Data<Notifier>,
    body: web::Json<RModuleCreate>,
) -> ApiResult<Response> {
    // 0) gate the collection before anything else
    let principal = resolve_principal(&db, auth.as_ref()).await?;
    module_policy::access(&principal, Action::Create).into_result()?;
    let Some(account) = principal.account() else {
        return Err(AppError::Unauthorized);
    };

    // 1) field checks, then the content filter, all before any insert
    let RModuleCreate { title, description, owner } = body.into_inner();
    let (title, description) = match (title, description) {
        (Some(title), Some(description)) => (title, description),
        (title, description) => {
            let mut errors = FieldErrors::new();
            if title.is_none() {
                errors.push("title", REQUIRED_FIELD_MESSAGE);
            }
            if description.is_none() {
                errors.push("description", REQUIRED_FIELD_MESSAGE);
            }
            return Err(AppError::Validation(errors));
        }
    };
    check_title_length(&title).map_err(AppError::Validation)?;
    validator.check(&title).map_err(AppError::Validation)?;

    // 2) owner is the requester unless a staff caller delegates by email
    let (owner_id, owner_email) = match resolve_owner(account, owner.as_deref()) {
        OwnerChoice::Requester => (account.id, account.email.clone()),
        OwnerChoice::Delegated(email) => match db.get_account_by_email(email).await {
            Ok(delegate) => (delegate.id, delegate.email),
            Err(AppError::NotFound) => {
                return Err(AppError::Validation(FieldErrors::single(
                    "owner",
                    format!("Объект с email={email} не существует."),
                )))
            }
            Err(e) => return Err(e),
        },
    };

    // 3) persist, then queue the notice for the creating principal. The
    //    response never waits on or learns about delivery.
    let module = db
        .create_module(DBModuleCreate {
            title,
            description,
            owner_id,
        })
        .await?;

    notifier.notify(Notice::ModuleCreated {
        email: account.email.clone(),
        title: module.title.clone(),
    });

    info!("module {} created by {}", module.id, account.email);

    Ok(ApiResponse::Created(Response {
        id: module.id,
        title: module.title,
        description: module.description,
        owner: owner_email,
    }))
}
