//! Monetary rounding.
//!
//! All monetary amounts are rounded to whole currency units with the same
//! half-up strategy, so that component sums reconcile exactly with the
//! totals built from them.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to whole currency units, half away from zero.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("1234.5").unwrap();
/// assert_eq!(round_currency(amount), Decimal::from(1235));
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
