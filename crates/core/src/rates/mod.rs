//! Rates module - rate plans, occupancy-keyed rates, and price lookup.

mod rates_model;
mod rates_service;
mod rates_traits;

pub use rates_model::{policy_text_for, Rate, RatePlan};
pub use rates_service::RatePlanPriceLookup;
pub use rates_traits::{PriceLookupTrait, PriceSheetRequest};
