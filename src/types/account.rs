use serde::{Deserialize, Serialize};
use uuid::Uuid;

use entity::account::Model as AccountModel;

/* Required fields are Options on purpose: a missing value should come back
   as a per-field message, not as a deserialize failure. */

#[derive(Serialize, Deserialize, Debug)]
pub struct RAccountRegister {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RAccountActivate {
    pub uid: Option<String>,
    pub token: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RTokenObtain {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RAccountUpdate {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct DBAccountCreate {
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub activation_hash: Option<String>,
}

/// Limited shape shown to other accounts (lists, nested module owner).
#[derive(Serialize, Deserialize, Debug)]
pub struct AccountSummary {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub city: Option<String>,
    pub avatar: Option<String>,
}

impl From<&AccountModel> for AccountSummary {
    fn from(account: &AccountModel) -> Self {
        AccountSummary {
            id: account.id,
            email: account.email.clone(),
            first_name: account.first_name.clone(),
            city: account.city.clone(),
            avatar: account.avatar.clone(),
        }
    }
}

/// Full profile, only served to the matching account.
#[derive(Serialize, Deserialize, Debug)]
pub struct AccountRes {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub avatar: Option<String>,
}

impl From<&AccountModel> for AccountRes {
    fn from(account: &AccountModel) -> Self {
        AccountRes {
            id: account.id,
            email: account.email.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            phone: account.phone.clone(),
            city: account.city.clone(),
            avatar: account.avatar.clone(),
        }
    }
}
