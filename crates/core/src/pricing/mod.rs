//! Pricing module - night price lines, price sheets, and totals.

mod pricing_model;
mod totals_calculator;

#[cfg(test)]
mod pricing_model_tests;

pub use pricing_model::{NightPrice, PriceSheet, Totals};
pub use totals_calculator::aggregate;
