//! Attendance aggregation functionality.
//!
//! This module reduces a pay period's daily attendance entries into the
//! [`PeriodTotals`] that drive the pay component calculations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{AttendanceRecord, PayPeriod, PeriodTotals};

/// Aggregates attendance records for a pay period into totals.
///
/// Only records with status `present` and a work date inside the period
/// (inclusive) participate. `work_days` counts the surviving records, and
/// `holiday_work_hours` sums regular hours only over holiday-flagged
/// records. An empty input yields all-zero totals.
///
/// Missing numeric fields are treated as zero; this is a documented
/// leniency toward partially-filled upstream records, logged as a warning
/// event rather than raised as an error.
pub fn aggregate_attendance(records: &[AttendanceRecord], period: &PayPeriod) -> PeriodTotals {
    let mut totals = PeriodTotals::zero();

    for record in records {
        if !record.is_present() || !period.contains_date(record.work_date) {
            continue;
        }

        let work_hours = numeric_or_zero(record.work_hours, "work_hours", record.work_date);
        let overtime_hours =
            numeric_or_zero(record.overtime_hours, "overtime_hours", record.work_date);
        let night_hours = numeric_or_zero(record.night_hours, "night_hours", record.work_date);

        totals.work_days += 1;
        totals.work_hours += work_hours;
        totals.overtime_hours += overtime_hours;
        totals.night_hours += night_hours;
        if record.is_holiday {
            totals.holiday_work_hours += work_hours;
        }
    }

    totals
}

/// Resolves an optional attendance value, defaulting missing or negative
/// values to zero with a logged data-quality event.
fn numeric_or_zero(value: Option<Decimal>, field: &str, work_date: NaiveDate) -> Decimal {
    match value {
        Some(v) if v >= Decimal::ZERO => v,
        Some(v) => {
            warn!(
                field,
                work_date = %work_date,
                value = %v,
                "negative attendance value treated as zero"
            );
            Decimal::ZERO
        }
        None => {
            warn!(
                field,
                work_date = %work_date,
                "missing attendance value treated as zero"
            );
            Decimal::ZERO
        }
    }
}
