//! Minimum-wage compliance check.
//!
//! Compares the effective hourly rate implied by base pay against the
//! statutory minimum. Failing the check never aborts a calculation: draft
//! payrolls below minimum wage are still produced, flagged for review.

use rust_decimal::Decimal;

use super::contract_resolution::FULL_TIME_MONTHLY_HOURS;

/// The outcome of a minimum-wage check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimumWageCheck {
    /// True when the effective hourly rate meets the statutory minimum.
    pub meets_minimum: bool,
    /// The effective hourly rate that was assessed.
    pub effective_hourly_rate: Decimal,
    /// The statutory minimum hourly rate it was compared against.
    pub minimum_hourly_rate: Decimal,
}

/// Checks base pay against the statutory monthly minimum wage.
///
/// The effective hourly rate is `base_pay / work_hours`, with zero logged
/// hours defaulting to the 209-hour full-time month. The statutory hourly
/// floor is `minimum_wage_monthly / 209`; an effective rate exactly at
/// the floor passes.
pub fn check_minimum_wage(
    base_pay: Decimal,
    work_hours: Decimal,
    minimum_wage_monthly: Decimal,
) -> MinimumWageCheck {
    let effective_hours = if work_hours == Decimal::ZERO {
        FULL_TIME_MONTHLY_HOURS
    } else {
        work_hours
    };

    let effective_hourly_rate = base_pay / effective_hours;
    let minimum_hourly_rate = minimum_wage_monthly / FULL_TIME_MONTHLY_HOURS;

    MinimumWageCheck {
        meets_minimum: effective_hourly_rate >= minimum_hourly_rate,
        effective_hourly_rate,
        minimum_hourly_rate,
    }
}
