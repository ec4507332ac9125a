use entity::module;

use super::{Action, Decision, DenyReason, Principal};

/// Stage one: the module collection only talks to authenticated accounts.
/// The action does not matter here, anonymous is out across the board.
pub fn access(principal: &Principal, _action: Action) -> Decision {
    if principal.is_authenticated() {
        Decision::Allow
    } else {
        Decision::Deny(DenyReason::Unauthenticated)
    }
}

/// Stage two, against a loaded module row.
///
/// Reads and writes are for the owner. Delete widens to superusers, and
/// staff get no shortcut anywhere here. Anything unlisted is denied.
pub fn object_access(principal: &Principal, action: Action, target: &module::Model) -> Decision {
    let Some(account) = principal.account() else {
        // Stage one already rejects these, do not rely on it though.
        return Decision::Deny(DenyReason::Unauthenticated);
    };

    let owns = account.id == target.owner_id;
    let allowed = match action {
        Action::Retrieve => owns,
        // Create lands here when a create verb is routed at an object.
        Action::Create | Action::Update => owns,
        Action::Delete => owns || account.is_superuser,
        _ => false,
    };

    if allowed {
        Decision::Allow
    } else {
        Decision::Deny(DenyReason::Forbidden)
    }
}
