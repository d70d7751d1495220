//! Rate plan domain models.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// One occupancy-keyed rate inside a rate plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    pub id: String,
    /// Guest count this rate is quoted for.
    pub occupancy: u32,
    /// Nightly price per calendar date.
    pub nightly_rates: BTreeMap<NaiveDate, Money>,
}

/// Named pricing policy producing nightly original prices per room
/// type and date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatePlan {
    pub id: String,
    pub name: String,
    pub room_type_id: String,
    pub rates: Vec<Rate>,
}

impl RatePlan {
    /// Picks the rate for a guest count: exact occupancy match, else the
    /// closest larger occupancy, else the closest smaller.
    pub fn rate_for_occupancy(&self, guest_count: u32) -> Option<&Rate> {
        let by_occupancy: BTreeMap<u32, &Rate> =
            self.rates.iter().map(|r| (r.occupancy, r)).collect();

        if let Some(rate) = by_occupancy.get(&guest_count) {
            return Some(rate);
        }
        if let Some((_, rate)) = by_occupancy.range(guest_count..).next() {
            return Some(rate);
        }
        by_occupancy.range(..guest_count).next_back().map(|(_, r)| *r)
    }
}

/// Resolves the cancellation-policy text shown for a rate plan.
///
/// Pure lookup over a prepared policy map so the presentation layer can
/// fill popovers without reaching into rendering state.
pub fn policy_text_for<'a>(
    plan_id: &str,
    policies: &'a HashMap<String, String>,
) -> Option<&'a str> {
    policies.get(plan_id).map(|s| s.as_str())
}
