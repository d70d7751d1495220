//! Money module - minor-unit monetary amounts.

mod money_model;

pub use money_model::Money;
