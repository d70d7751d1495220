//! Stayboard Core - Domain entities, services, and traits.
//!
//! This crate contains the reservation pricing engine behind the agenda
//! board: price sheets, totals aggregation, draft building, and the
//! recalculation workflow. It is transport- and storage-agnostic and
//! defines traits that are implemented by the surrounding application.

pub mod constants;
pub mod drafts;
pub mod errors;
pub mod events;
pub mod money;
pub mod permissions;
pub mod pricing;
pub mod rates;
pub mod recalc;
pub mod rooms;
pub mod settings;
pub mod utils;

// Re-export common types
pub use money::Money;
pub use pricing::{NightPrice, PriceSheet, Totals};
pub use utils::StayRange;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
