use crate::db::postgres_service::PostgresService;
use crate::types::{
    error::AppError,
    module::{DBModuleCreate, RModuleUpdate},
};
use chrono::Utc;
use entity::account::{Entity as Account, Model as AccountModel};
use entity::module::{ActiveModel as ModuleActive, Entity as Module, Model as ModuleModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, PaginatorTrait, Set};
use uuid::Uuid;

use crate::utils::token;

impl PostgresService {
    pub async fn count_modules(&self) -> Result<u64, AppError> {
        Ok(Module::find().count(&self.db).await?)
    }

    pub async fn get_module(&self, id: &Uuid) -> Result<ModuleModel, AppError> {
        Ok(Module::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Module does not exist".into()))?)
    }

    /// Every module joined with its owner row. The owner side is None only
    /// if the FK is broken, callers may skip those.
    pub async fn list_modules_with_owners(
        &self,
    ) -> Result<Vec<(ModuleModel, Option<AccountModel>)>, AppError> {
        Ok(Module::find().find_also_related(Account).all(&self.db).await?)
    }

    pub async fn create_module(&self, payload: DBModuleCreate) -> Result<ModuleModel, AppError> {
        let now = Utc::now();
        let am = ModuleActive {
            id: Set(token::new_id()),
            title: Set(payload.title),
            description: Set(payload.description),
            owner_id: Set(payload.owner_id),
            created_at: Set(now),
            updated_at: Set(now),
        };
        Ok(am.insert(&self.db).await?)
    }

    pub async fn update_module(
        &self,
        id: &Uuid,
        patch: RModuleUpdate,
    ) -> Result<ModuleModel, AppError> {
        let mut am: ModuleActive = self.get_module(id).await?.into();
        if let Some(title) = patch.title {
            am.title = Set(title);
        }
        if let Some(description) = patch.description {
            am.description = Set(description);
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_module(&self, id: &Uuid) -> Result<(), AppError> {
        let am: ModuleActive = self.get_module(id).await?.into();
        am.delete(&self.db).await?;
        Ok(())
    }
}
