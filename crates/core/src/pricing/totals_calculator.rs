//! Totals aggregation over a price sheet.

use rust_decimal::Decimal;

use crate::errors::Result;
use crate::money::Money;

use super::pricing_model::{PriceSheet, Totals};

/// Aggregates a price sheet into subtotal/tax/total figures for both the
/// accepted and the original prices.
///
/// Unset accepted prices count as zero. Taxes are computed once on each
/// subtotal and rounded half-up to a whole minor unit; per-line rounding
/// would accumulate drift across long stays. A non-positive tax rate
/// yields zero taxes. The function is pure: calling it twice with the
/// same sheet yields identical totals.
pub fn aggregate(sheet: &PriceSheet, tax_rate_percent: Decimal) -> Result<Totals> {
    let zero = Money::zero(sheet.currency());

    let mut accepted_subtotal = zero.clone();
    let mut original_subtotal = zero;
    for line in sheet.nights() {
        if let Some(accepted) = &line.price_accepted {
            accepted_subtotal = accepted_subtotal.checked_add(accepted)?;
        }
        original_subtotal = original_subtotal.checked_add(&line.price_original)?;
    }

    let accepted_tax = accepted_subtotal.percent(tax_rate_percent);
    let original_tax = original_subtotal.percent(tax_rate_percent);
    let accepted_total = accepted_subtotal.checked_add(&accepted_tax)?;
    let original_total = original_subtotal.checked_add(&original_tax)?;

    Ok(Totals {
        accepted_subtotal,
        original_subtotal,
        accepted_tax,
        original_tax,
        accepted_total,
        original_total,
    })
}
