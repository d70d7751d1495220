//! Permissions module - capability filtering for the presentation layer.
//!
//! Gating only decides which controls are rendered. The draft state
//! machine and pricing logic behave identically whatever is gated;
//! permission checks are never a data-integrity control inside the core.

mod permissions_model;
mod permissions_traits;

pub use permissions_model::{Action, CapabilitySet, Scope};
pub use permissions_traits::{AllowAllPermissions, PermissionsTrait};
