//! Money value type.
//!
//! Amounts are carried as integer minor units (cents) plus an ISO 4217
//! currency code, so sums never touch floating point. Percentages go
//! through `Decimal` and round half-up to a whole minor unit - callers
//! apply that once on an aggregate, not per line, to avoid cumulative
//! rounding drift.

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// A monetary amount in a single currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Amount in the currency's minor units (e.g. cents).
    pub minor_units: i64,
    /// ISO 4217 currency code.
    pub currency: String,
}

impl Money {
    pub fn new(minor_units: i64, currency: impl Into<String>) -> Self {
        Money {
            minor_units,
            currency: currency.into(),
        }
    }

    pub fn zero(currency: impl Into<String>) -> Self {
        Money::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.minor_units == 0
    }

    pub fn is_negative(&self) -> bool {
        self.minor_units < 0
    }

    /// Adds two amounts of the same currency.
    pub fn checked_add(&self, other: &Money) -> Result<Money> {
        if self.currency != other.currency {
            return Err(Error::CurrencyMismatch {
                left: self.currency.clone(),
                right: other.currency.clone(),
            });
        }
        let minor_units = self
            .minor_units
            .checked_add(other.minor_units)
            .ok_or_else(|| Error::Unexpected("monetary amount overflow".to_string()))?;
        Ok(Money::new(minor_units, self.currency.clone()))
    }

    /// Computes `rate_percent` % of this amount, rounded half-up to a
    /// whole minor unit. Non-positive rates yield zero.
    pub fn percent(&self, rate_percent: Decimal) -> Money {
        if rate_percent <= Decimal::ZERO {
            return Money::zero(self.currency.clone());
        }
        let exact = Decimal::from(self.minor_units) * rate_percent / Decimal::from(100);
        let minor_units = exact
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .unwrap_or(i64::MAX);
        Money::new(minor_units, self.currency.clone())
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.minor_units, self.currency)
    }
}
