use crate::policy::AccountRef;

/// Who a fresh module should belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerChoice<'a> {
    /// The creating principal itself.
    Requester,
    /// A different account, named by email. Staff only.
    Delegated(&'a str),
}

/// Server-side owner resolution for module creation.
///
/// A regular account always becomes the owner of what it creates, whatever
/// the payload claims. Staff may hand ownership to another account by email.
/// A staff payload without an owner falls back to the requester, same as
/// everyone else.
pub fn resolve_owner<'a>(requester: &AccountRef, requested: Option<&'a str>) -> OwnerChoice<'a> {
    match requested {
        Some(email) if requester.is_staff => OwnerChoice::Delegated(email),
        _ => OwnerChoice::Requester,
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn requester(staff: bool) -> AccountRef {
        AccountRef {
            id: Uuid::new_v4(),
            email: "creator@test.com".to_string(),
            is_active: true,
            is_staff: staff,
            is_superuser: false,
        }
    }

    #[test]
    fn test_regular_account_payload_owner_ignored() {
        let choice = resolve_owner(&requester(false), Some("other@test.com"));
        assert_eq!(choice, OwnerChoice::Requester);
    }

    #[test]
    fn test_regular_account_no_owner_given() {
        assert_eq!(resolve_owner(&requester(false), None), OwnerChoice::Requester);
    }

    #[test]
    fn test_staff_delegates_by_email() {
        let choice = resolve_owner(&requester(true), Some("other@test.com"));
        assert_eq!(choice, OwnerChoice::Delegated("other@test.com"));
    }

    #[test]
    fn test_staff_without_owner_keeps_it() {
        assert_eq!(resolve_owner(&requester(true), None), OwnerChoice::Requester);
    }
}
