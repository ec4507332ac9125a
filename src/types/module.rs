use serde::{Deserialize, Serialize};
use uuid::Uuid;

use entity::{account::Model as AccountModel, module::Model as ModuleModel};

use crate::types::account::AccountSummary;

#[derive(Serialize, Deserialize, Debug)]
pub struct RModuleCreate {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Owner email. Accepted from anyone, honored only for staff callers.
    pub owner: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RModuleUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct DBModuleCreate {
    pub title: String,
    pub description: String,
    pub owner_id: Uuid,
}

/// Module with its owner nested in the limited account shape.
#[derive(Serialize, Deserialize, Debug)]
pub struct ModuleRes {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub owner: AccountSummary,
}

impl ModuleRes {
    pub fn from_parts(module: &ModuleModel, owner: &AccountModel) -> Self {
        ModuleRes {
            id: module.id,
            title: module.title.clone(),
            description: module.description.clone(),
            owner: AccountSummary::from(owner),
        }
    }
}
