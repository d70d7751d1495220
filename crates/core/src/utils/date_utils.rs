use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// A stay period: check-in inclusive, check-out exclusive.
///
/// Construction enforces `checkin < checkout`; a one-night stay is the
/// smallest valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayRange {
    checkin: NaiveDate,
    checkout: NaiveDate,
}

impl StayRange {
    pub fn new(checkin: NaiveDate, checkout: NaiveDate) -> Result<Self> {
        if checkin >= checkout {
            return Err(Error::InvalidDateRange { checkin, checkout });
        }
        Ok(StayRange { checkin, checkout })
    }

    pub fn checkin(&self) -> NaiveDate {
        self.checkin
    }

    pub fn checkout(&self) -> NaiveDate {
        self.checkout
    }

    /// Number of nights in the stay.
    pub fn night_count(&self) -> i64 {
        (self.checkout - self.checkin).num_days()
    }

    /// The nights of the stay, check-in inclusive, check-out exclusive.
    pub fn nights(&self) -> Vec<NaiveDate> {
        let mut days = Vec::with_capacity(self.night_count() as usize);
        let mut current = self.checkin;
        while current < self.checkout {
            days.push(current);
            match current.succ_opt() {
                Some(next) => current = next,
                None => break,
            }
        }
        days
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.checkin <= day && day < self.checkout
    }
}
