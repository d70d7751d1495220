//! Per-session configuration.
//!
//! One `SessionConfig` is built per editing session and handed to the
//! recalculation controller at construction. Nothing here is global:
//! closing the session drops the config with it.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_RECALC_TIMEOUT_SECS;

/// Configuration for one editing session of the agenda board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Currency all prices in the session are quoted in.
    pub currency: String,
    /// Flat tax rate applied on the aggregate, in percent.
    pub tax_rate_percent: Decimal,
    /// Bound on a single pricing recalculation before it counts as failed.
    #[serde(default = "default_recalc_timeout")]
    pub recalc_timeout: Duration,
}

fn default_recalc_timeout() -> Duration {
    Duration::from_secs(DEFAULT_RECALC_TIMEOUT_SECS)
}

impl SessionConfig {
    pub fn new(currency: impl Into<String>, tax_rate_percent: Decimal) -> Self {
        SessionConfig {
            currency: currency.into(),
            tax_rate_percent,
            recalc_timeout: default_recalc_timeout(),
        }
    }

    pub fn with_recalc_timeout(mut self, timeout: Duration) -> Self {
        self.recalc_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::new("EUR", dec!(10));
        assert_eq!(config.currency, "EUR");
        assert_eq!(
            config.recalc_timeout,
            Duration::from_secs(DEFAULT_RECALC_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_with_recalc_timeout() {
        let config =
            SessionConfig::new("EUR", dec!(10)).with_recalc_timeout(Duration::from_millis(250));
        assert_eq!(config.recalc_timeout, Duration::from_millis(250));
    }
}
