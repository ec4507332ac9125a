use uuid::Uuid;

use crate::types::error::AppError;

pub mod account;
pub mod module;

/*
 Access control runs in two stages. Stage one gates the collection: is this
 principal allowed to talk to the resource at all. Stage two runs only once
 a concrete row has been addressed and compares the principal against it.
 Handlers call stage one before touching the database, stage two right after
 loading the row and before acting on it.
 */

/// The acting identity behind a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Principal {
    Anonymous,
    Account(AccountRef),
}

/// The slice of an account row the policies look at.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountRef {
    pub id: Uuid,
    pub email: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

impl Principal {
    pub fn from_account(account: &entity::account::Model) -> Self {
        Principal::Account(AccountRef {
            id: account.id,
            email: account.email.clone(),
            is_active: account.is_active,
            is_staff: account.is_staff,
            is_superuser: account.is_superuser,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Principal::Account(_))
    }

    pub fn account(&self) -> Option<&AccountRef> {
        match self {
            Principal::Account(account) => Some(account),
            Principal::Anonymous => None,
        }
    }
}

/// What the request is trying to do, independent of the HTTP verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Retrieve,
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    Unauthenticated,
    Forbidden,
}

impl Decision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// Denials map onto the matching HTTP error: 401 for a missing
    /// identity, 403 for a known one that may not do this.
    pub fn into_result(self) -> Result<(), AppError> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(DenyReason::Unauthenticated) => Err(AppError::Unauthorized),
            Decision::Deny(DenyReason::Forbidden) => Err(AppError::Forbidden),
        }
    }
}
