//! Weekly-rest-day pay calculation.
//!
//! Part-time employees averaging at least 15 hours per week earn a paid
//! weekly rest day. This module computes that statutory pay from the
//! period's aggregated attendance.

use rust_decimal::Decimal;

use crate::models::PeriodTotals;

use super::rounding::round_currency;

/// Minimum average weekly hours for weekly-rest-day eligibility.
pub const MIN_AVG_WEEKLY_HOURS: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Calculates weekly-rest-day pay for a part-time employee.
///
/// The week count is `ceil(work_days / 7)`; eligibility requires the
/// average weekly hours over those weeks to reach
/// [`MIN_AVG_WEEKLY_HOURS`]. When eligible, the pay is one average day's
/// hours at the hourly rate, once per week. Zero work days yield zero.
///
/// The ceiling week count can overstate weeks for short periods (three
/// work days count as one full week); that behavior matches the statutory
/// interpretation this engine implements and is kept deliberately.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_weekly_rest_pay;
/// use payroll_engine::models::PeriodTotals;
/// use rust_decimal::Decimal;
///
/// let totals = PeriodTotals {
///     work_days: 20,
///     work_hours: Decimal::from(160),
///     overtime_hours: Decimal::ZERO,
///     night_hours: Decimal::ZERO,
///     holiday_work_hours: Decimal::ZERO,
/// };
/// // 3 weeks, ~53.3 h/week average: eligible, 8 h/day x 10,000 x 3 weeks.
/// let pay = calculate_weekly_rest_pay(&totals, Decimal::from(10_000));
/// assert_eq!(pay, Decimal::from(240_000));
/// ```
pub fn calculate_weekly_rest_pay(totals: &PeriodTotals, hourly_rate: Decimal) -> Decimal {
    if totals.work_days == 0 {
        return Decimal::ZERO;
    }

    let weeks = Decimal::from(totals.work_days.div_ceil(7));
    let avg_weekly_hours = totals.work_hours / weeks;

    if avg_weekly_hours < MIN_AVG_WEEKLY_HOURS {
        return Decimal::ZERO;
    }

    let avg_daily_hours = totals.work_hours / Decimal::from(totals.work_days);
    round_currency(avg_daily_hours * hourly_rate * weeks)
}
