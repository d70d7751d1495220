use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::permissions_traits::PermissionsTrait;

/// Actions the agenda board can expose to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    ViewCalendar,
    ViewReservation,
    CreateReservation,
    UpdateReservation,
    DeleteReservation,
    CloseRoom,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::ViewCalendar,
        Action::ViewReservation,
        Action::CreateReservation,
        Action::UpdateReservation,
        Action::DeleteReservation,
        Action::CloseRoom,
    ];
}

/// Scope a permission is checked against: one property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scope {
    pub property_id: String,
}

/// The actions a user may see, resolved once per render pass instead of
/// scattering boolean checks through the templates.
#[derive(Debug, Clone)]
pub struct CapabilitySet {
    actions: HashSet<Action>,
}

impl CapabilitySet {
    pub fn resolve(permissions: &dyn PermissionsTrait, user_id: &str, scope: &Scope) -> Self {
        CapabilitySet {
            actions: Action::ALL
                .iter()
                .copied()
                .filter(|action| permissions.has_permission(user_id, *action, scope))
                .collect(),
        }
    }

    pub fn allows(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
