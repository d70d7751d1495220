use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;

use crate::errors::{Error, Result};
use crate::pricing::PriceSheet;
use crate::rates::rates_model::RatePlan;
use crate::rates::rates_traits::{PriceLookupTrait, PriceSheetRequest};

/// Price lookup backed by an in-memory set of rate plans.
///
/// Reference implementation of [`PriceLookupTrait`]: resolves the plan,
/// selects the rate by occupancy, and builds the sheet from the rate's
/// nightly calendar. Production deployments put the remote pricing
/// service behind the same trait.
pub struct RatePlanPriceLookup {
    plans: HashMap<String, RatePlan>,
    currency: String,
}

impl RatePlanPriceLookup {
    pub fn new(plans: Vec<RatePlan>, currency: impl Into<String>) -> Self {
        RatePlanPriceLookup {
            plans: plans.into_iter().map(|p| (p.id.clone(), p)).collect(),
            currency: currency.into(),
        }
    }
}

#[async_trait]
impl PriceLookupTrait for RatePlanPriceLookup {
    async fn fetch_price_sheet(&self, request: &PriceSheetRequest) -> Result<PriceSheet> {
        let plan = self
            .plans
            .get(&request.rate_plan_id)
            .ok_or_else(|| Error::MissingRatePlan(request.rate_plan_id.clone()))?;

        if plan.room_type_id != request.room_type_id {
            return Err(Error::MissingRatePlan(format!(
                "Rate plan '{}' does not price room type '{}'",
                plan.id, request.room_type_id
            )));
        }

        let rate = plan.rate_for_occupancy(request.occupancy).ok_or_else(|| {
            Error::MissingRate(format!(
                "Rate plan '{}' has no rate for occupancy {}",
                plan.id, request.occupancy
            ))
        })?;
        debug!(
            "Pricing stay {}..{} with plan '{}' rate '{}'",
            request.stay.checkin(),
            request.stay.checkout(),
            plan.id,
            rate.id
        );

        PriceSheet::build(
            request.stay,
            request.room_type_id.clone(),
            &plan.id,
            &rate.nightly_rates,
            &self.currency,
        )
    }
}
