//! Recalculation module - keeps displayed prices consistent with the
//! latest user-selected plan, rate, stay, and room assignment.

mod recalc_service;


pub use recalc_service::{RecalcOutcome, RecalculationController};
