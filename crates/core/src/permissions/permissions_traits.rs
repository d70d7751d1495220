use super::permissions_model::{Action, Scope};

/// Permission collaborator.
///
/// Answered by the backend's access-control system; the core only asks.
pub trait PermissionsTrait: Send + Sync {
    fn has_permission(&self, user_id: &str, action: Action, scope: &Scope) -> bool;
}

/// Grants everything. For tests and single-user deployments.
#[derive(Clone, Default)]
pub struct AllowAllPermissions;

impl PermissionsTrait for AllowAllPermissions {
    fn has_permission(&self, _user_id: &str, _action: Action, _scope: &Scope) -> bool {
        true
    }
}
