use entity::account;

use super::{Action, Decision, DenyReason, Principal};

/// Stage one: account collection endpoints require a signed-in principal.
/// Registration and activation never consult this, they are open by design
/// and wired without a policy call.
pub fn access(principal: &Principal, _action: Action) -> Decision {
    if principal.is_authenticated() {
        Decision::Allow
    } else {
        Decision::Deny(DenyReason::Unauthenticated)
    }
}

/// Stage two, against a loaded account row. Profile reads and writes are
/// self-service (matched by email, which is unique). Delete is for staff
/// only, an account never removes itself.
pub fn object_access(principal: &Principal, action: Action, target: &account::Model) -> Decision {
    let Some(account) = principal.account() else {
        return Decision::Deny(DenyReason::Unauthenticated);
    };

    let is_self = account.email == target.email;
    let allowed = match action {
        Action::Retrieve | Action::Update | Action::Create => is_self,
        Action::Delete => account.is_staff,
        _ => false,
    };

    if allowed {
        Decision::Allow
    } else {
        Decision::Deny(DenyReason::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::policy::AccountRef;

    fn account_row(email: &str) -> account::Model {
        account::Model {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: "x".to_string(),
            first_name: None,
            last_name: None,
            phone: None,
            city: None,
            avatar: None,
            is_active: true,
            is_staff: false,
            is_superuser: false,
            activation_hash: None,
            auth_hash: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn principal(email: &str, staff: bool) -> Principal {
        Principal::Account(AccountRef {
            id: Uuid::new_v4(),
            email: email.to_string(),
            is_active: true,
            is_staff: staff,
            is_superuser: false,
        })
    }

    #[test]
    fn test_collection_gate() {
        assert_eq!(
            access(&Principal::Anonymous, Action::List),
            Decision::Deny(DenyReason::Unauthenticated)
        );
        assert!(access(&principal("a@test.com", false), Action::List).is_allow());
    }

    #[test]
    fn test_profile_is_self_service() {
        let target = account_row("a@test.com");

        assert!(object_access(&principal("a@test.com", false), Action::Retrieve, &target).is_allow());
        assert!(object_access(&principal("a@test.com", false), Action::Update, &target).is_allow());

        assert_eq!(
            object_access(&principal("b@test.com", false), Action::Retrieve, &target),
            Decision::Deny(DenyReason::Forbidden)
        );
        assert_eq!(
            object_access(&principal("b@test.com", false), Action::Update, &target),
            Decision::Deny(DenyReason::Forbidden)
        );
    }

    #[test]
    fn test_delete_is_staff_only() {
        let target = account_row("a@test.com");

        // not even the account holder
        assert_eq!(
            object_access(&principal("a@test.com", false), Action::Delete, &target),
            Decision::Deny(DenyReason::Forbidden)
        );
        assert!(object_access(&principal("b@test.com", true), Action::Delete, &target).is_allow());
    }

    #[test]
    fn test_staff_cannot_read_foreign_profile() {
        let target = account_row("a@test.com");
        assert_eq!(
            object_access(&principal("b@test.com", true), Action::Retrieve, &target),
            Decision::Deny(DenyReason::Forbidden)
        );
    }
}
