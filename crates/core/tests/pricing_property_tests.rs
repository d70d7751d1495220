//! Property-based tests for price sheet construction and aggregation.
//!
//! These tests verify that universal properties hold across all valid
//! inputs, using the `proptest` crate for random test case generation.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use stayboard_core::money::Money;
use stayboard_core::pricing::{aggregate, PriceSheet};
use stayboard_core::utils::StayRange;

// =============================================================================
// Generators
// =============================================================================

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

prop_compose! {
    /// Generates a stay of 1..45 nights starting within two years of the
    /// base date.
    fn arb_stay()(offset in 0i64..730, nights in 1i64..45) -> StayRange {
        let checkin = base_date() + Duration::days(offset);
        StayRange::new(checkin, checkin + Duration::days(nights)).unwrap()
    }
}

/// Builds a sheet for the stay, cycling through the given nightly prices.
fn sheet_with_prices(stay: StayRange, prices: &[i64]) -> PriceSheet {
    let rates: BTreeMap<NaiveDate, Money> = stay
        .nights()
        .into_iter()
        .enumerate()
        .map(|(i, day)| (day, Money::new(prices[i % prices.len()], "EUR")))
        .collect();
    PriceSheet::build(stay, "rt-double", "plan-std", &rates, "EUR")
        .expect("full rate coverage must build")
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For all valid date ranges `[a, b)` with `a < b`, building a sheet
    /// produces exactly `b - a` lines, one per date, no gaps, no
    /// duplicates.
    #[test]
    fn prop_one_line_per_night(stay in arb_stay(), price in 0i64..100_000) {
        let sheet = sheet_with_prices(stay, &[price]);

        prop_assert_eq!(sheet.night_count() as i64, stay.night_count());

        let days: Vec<NaiveDate> = sheet.nights().iter().map(|l| l.day).collect();
        prop_assert_eq!(days[0], stay.checkin());
        for pair in days.windows(2) {
            prop_assert_eq!(pair[0] + Duration::days(1), pair[1]);
        }
        prop_assert_eq!(
            days[days.len() - 1] + Duration::days(1),
            stay.checkout()
        );
    }

    /// Aggregation is idempotent: the same sheet and tax rate always
    /// yield identical totals.
    #[test]
    fn prop_aggregate_is_idempotent(
        stay in arb_stay(),
        prices in proptest::collection::vec(0i64..50_000, 1..16),
        rate_hundredths in 0i64..=10_000,
    ) {
        let sheet = sheet_with_prices(stay, &prices);
        let tax_rate = Decimal::new(rate_hundredths, 2);

        let first = aggregate(&sheet, tax_rate).unwrap();
        let second = aggregate(&sheet, tax_rate).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Rounding law: `total == subtotal + tax` exactly, for any tax rate
    /// in [0, 100], on both the accepted and the original side.
    #[test]
    fn prop_total_is_subtotal_plus_tax(
        stay in arb_stay(),
        prices in proptest::collection::vec(0i64..50_000, 1..16),
        rate_hundredths in 0i64..=10_000,
    ) {
        let sheet = sheet_with_prices(stay, &prices);
        let tax_rate = Decimal::new(rate_hundredths, 2);
        let totals = aggregate(&sheet, tax_rate).unwrap();

        prop_assert_eq!(
            totals.accepted_total.minor_units,
            totals.accepted_subtotal.minor_units + totals.accepted_tax.minor_units
        );
        prop_assert_eq!(
            totals.original_total.minor_units,
            totals.original_subtotal.minor_units + totals.original_tax.minor_units
        );
    }

    /// Unset accepted prices count as zero in the accepted subtotal and
    /// never disturb the original side.
    #[test]
    fn prop_cleared_nights_count_zero(
        stay in arb_stay(),
        price in 1i64..50_000,
        clear_every in 2usize..5,
    ) {
        let mut sheet = sheet_with_prices(stay, &[price]);
        let days: Vec<NaiveDate> = sheet.nights().iter().map(|l| l.day).collect();

        let mut kept = 0i64;
        for (i, day) in days.iter().enumerate() {
            if i % clear_every == 0 {
                sheet.clear_accepted_price(*day).unwrap();
            } else {
                kept += 1;
            }
        }

        let totals = aggregate(&sheet, Decimal::ZERO).unwrap();
        prop_assert_eq!(totals.accepted_subtotal.minor_units, kept * price);
        prop_assert_eq!(
            totals.original_subtotal.minor_units,
            stay.night_count() * price
        );
    }

    /// A zero tax rate always produces zero taxes and `total == subtotal`.
    #[test]
    fn prop_zero_rate_means_zero_tax(
        stay in arb_stay(),
        prices in proptest::collection::vec(0i64..50_000, 1..16),
    ) {
        let sheet = sheet_with_prices(stay, &prices);
        let totals = aggregate(&sheet, Decimal::ZERO).unwrap();

        prop_assert!(totals.accepted_tax.is_zero());
        prop_assert!(totals.original_tax.is_zero());
        prop_assert_eq!(&totals.accepted_total, &totals.accepted_subtotal);
    }
}
