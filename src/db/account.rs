use crate::db::postgres_service::PostgresService;
use crate::types::{
    account::{DBAccountCreate, RAccountUpdate},
    error::AppError,
};
use chrono::Utc;
use entity::account::{ActiveModel as AccountActive, Entity as Account, Model as AccountModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use uuid::Uuid;

use crate::utils::token;

impl PostgresService {
    pub async fn account_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_account_by_id(&self, id: &Uuid) -> Result<AccountModel, AppError> {
        Ok(Account::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Account does not exist".into()))?)
    }

    pub async fn get_account_by_email(&self, email: &str) -> Result<AccountModel, AppError> {
        Ok(Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Account does not exist".into()))?)
    }

    pub async fn list_accounts(&self) -> Result<Vec<AccountModel>, AppError> {
        Ok(Account::find()
            .order_by_asc(entity::account::Column::Email)
            .all(&self.db)
            .await?)
    }

    /// Signup: insert the row. Fresh self-registrations arrive inactive with
    /// an activation hash, seeded admins arrive active without one.
    pub async fn create_account(&self, payload: DBAccountCreate) -> Result<Uuid, AppError> {
        if self.account_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }
        let uid = token::new_id();
        let now = Utc::now();
        let txn = self.db.begin().await?;

        Account::insert(AccountActive {
            id: Set(uid),
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            phone: Set(payload.phone),
            city: Set(payload.city),
            avatar: Set(None),
            is_active: Set(payload.is_active),
            is_staff: Set(payload.is_staff),
            is_superuser: Set(payload.is_superuser),
            activation_hash: Set(payload.activation_hash),
            auth_hash: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        Ok(uid)
    }

    /// Flip the account active and retire the one-time code.
    pub async fn activate_account(&self, id: &Uuid) -> Result<(), AppError> {
        let mut am: AccountActive = self.get_account_by_id(id).await?.into();
        am.is_active = Set(true);
        am.activation_hash = Set(None);
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await.map(|_| ())?)
    }

    /// Store the hash of a freshly minted bearer secret. Replaces the
    /// previous one, so older tokens stop verifying.
    pub async fn set_auth_hash(&self, id: &Uuid, hash: String) -> Result<(), AppError> {
        let mut am: AccountActive = self.get_account_by_id(id).await?.into();
        am.auth_hash = Set(Some(hash));
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await.map(|_| ())?)
    }

    pub async fn update_account(
        &self,
        id: &Uuid,
        patch: RAccountUpdate,
    ) -> Result<AccountModel, AppError> {
        let current = self.get_account_by_id(id).await?;
        if let Some(email) = &patch.email {
            if email != &current.email && self.account_exists_by_email(email).await? {
                return Err(AppError::AlreadyExists);
            }
        }

        let mut am: AccountActive = current.into();
        if let Some(email) = patch.email {
            am.email = Set(email);
        }
        if let Some(first_name) = patch.first_name {
            am.first_name = Set(Some(first_name));
        }
        if let Some(last_name) = patch.last_name {
            am.last_name = Set(Some(last_name));
        }
        if let Some(phone) = patch.phone {
            am.phone = Set(Some(phone));
        }
        if let Some(city) = patch.city {
            am.city = Set(Some(city));
        }
        if let Some(avatar) = patch.avatar {
            am.avatar = Set(Some(avatar));
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_account(&self, id: &Uuid) -> Result<(), AppError> {
        // load first so unknown ids come back as NotFound
        let am: AccountActive = self.get_account_by_id(id).await?.into();
        am.delete(&self.db).await?;
        Ok(())
    }
}
