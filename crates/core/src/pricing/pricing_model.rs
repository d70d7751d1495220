//! Price sheet domain models.
//!
//! A `PriceSheet` holds one `NightPrice` line per night of a stay,
//! check-in inclusive, check-out exclusive. The sheet owns its
//! invariants: contiguous dates, one currency, room assignments that
//! match the segment's room type. Editing a single line never touches
//! the other lines.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::money::Money;
use crate::rooms::RoomInventory;
use crate::utils::StayRange;

/// One calendar night of a stay with its room and price assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NightPrice {
    pub day: NaiveDate,
    /// Assigned room, if one has been chosen for this night.
    pub room_id: Option<String>,
    /// Price charged to the guest. Defaults to the original price until
    /// the hotelier overrides it.
    pub price_accepted: Option<Money>,
    /// Price as sourced from the rate plan or OTA channel, unmodified.
    pub price_original: Money,
}

/// Derived subtotal/tax/total figures for a price sheet.
///
/// Always computed from a sheet, never stored independently of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub accepted_subtotal: Money,
    pub original_subtotal: Money,
    pub accepted_tax: Money,
    pub original_tax: Money,
    pub accepted_total: Money,
    pub original_total: Money,
}

/// Ordered-by-date price lines for one reservation segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSheet {
    currency: String,
    room_type_id: String,
    nights: Vec<NightPrice>,
}

impl PriceSheet {
    /// Builds a sheet for a stay from a rate plan's nightly rates.
    ///
    /// Produces exactly one line per night of `[checkin, checkout)`, with
    /// `price_original` sourced from the nightly rate for that date and
    /// `price_accepted` defaulted to it. A night without rate coverage is
    /// an explicit `MissingNightlyRate` error, never a silent zero.
    pub fn build(
        stay: StayRange,
        room_type_id: impl Into<String>,
        plan_id: &str,
        nightly_rates: &BTreeMap<NaiveDate, Money>,
        currency: &str,
    ) -> Result<PriceSheet> {
        let room_type_id = room_type_id.into();
        let mut nights = Vec::with_capacity(stay.night_count() as usize);
        for day in stay.nights() {
            let rate = nightly_rates
                .get(&day)
                .ok_or_else(|| Error::MissingNightlyRate {
                    day,
                    plan_id: plan_id.to_string(),
                })?;
            if rate.currency != currency {
                return Err(Error::CurrencyMismatch {
                    left: currency.to_string(),
                    right: rate.currency.clone(),
                });
            }
            if rate.is_negative() {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Negative nightly rate for {}",
                    day
                ))));
            }
            nights.push(NightPrice {
                day,
                room_id: None,
                price_accepted: Some(rate.clone()),
                price_original: rate.clone(),
            });
        }
        Ok(PriceSheet {
            currency: currency.to_string(),
            room_type_id,
            nights,
        })
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn room_type_id(&self) -> &str {
        &self.room_type_id
    }

    pub fn nights(&self) -> &[NightPrice] {
        &self.nights
    }

    pub fn night_count(&self) -> usize {
        self.nights.len()
    }

    /// The stay the sheet covers, reconstructed from its lines.
    pub fn stay(&self) -> Result<StayRange> {
        let first = self.nights.first().ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput("Empty price sheet".to_string()))
        })?;
        let last = self.nights.last().ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput("Empty price sheet".to_string()))
        })?;
        let checkout = last.day.succ_opt().ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput("Date out of range".to_string()))
        })?;
        StayRange::new(first.day, checkout)
    }

    /// Overrides the accepted price of a single night. Other lines are
    /// untouched.
    pub fn set_accepted_price(&mut self, day: NaiveDate, price: Money) -> Result<()> {
        if price.currency != self.currency {
            return Err(Error::CurrencyMismatch {
                left: self.currency.clone(),
                right: price.currency,
            });
        }
        if price.is_negative() {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Negative accepted price for {}",
                day
            ))));
        }
        let line = self.night_mut(day)?;
        line.price_accepted = Some(price);
        Ok(())
    }

    /// Clears the accepted price of a single night. The night then
    /// counts as zero in the accepted subtotal until it is priced again.
    pub fn clear_accepted_price(&mut self, day: NaiveDate) -> Result<()> {
        let line = self.night_mut(day)?;
        line.price_accepted = None;
        Ok(())
    }

    /// Assigns a room to a single night. The room must belong to the
    /// room type selected for this segment.
    pub fn assign_room(
        &mut self,
        day: NaiveDate,
        room_id: &str,
        inventory: &RoomInventory,
    ) -> Result<()> {
        if inventory.get(room_id).is_none() {
            return Err(Error::MissingRoom(format!("Unknown room '{}'", room_id)));
        }
        if !inventory.belongs_to(room_id, &self.room_type_id) {
            return Err(Error::MissingRoom(format!(
                "Room '{}' does not belong to room type '{}'",
                room_id, self.room_type_id
            )));
        }
        let line = self.night_mut(day)?;
        line.room_id = Some(room_id.to_string());
        Ok(())
    }

    /// Checks the sheet is complete enough to persist: every night must
    /// have a room assigned.
    pub fn finalize_for_save(&self) -> Result<()> {
        for line in &self.nights {
            if line.room_id.is_none() {
                return Err(Error::IncompleteAssignment { day: line.day });
            }
        }
        Ok(())
    }

    fn night_mut(&mut self, day: NaiveDate) -> Result<&mut NightPrice> {
        self.nights
            .iter_mut()
            .find(|line| line.day == day)
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Night {} is not part of this stay",
                    day
                )))
            })
    }
}
