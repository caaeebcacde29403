//! Attendance models.
//!
//! This module defines the per-day [`AttendanceRecord`] produced by the
//! external time-tracking collaborator and the derived [`PeriodTotals`]
//! that summarize a pay period.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The status of a daily attendance record.
///
/// Only [`Present`](AttendanceStatus::Present) records participate in
/// payroll aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee worked on this day.
    Present,
    /// The employee was absent.
    Absent,
    /// The employee was on leave.
    Leave,
}

/// One finalized attendance record per work day.
///
/// Numeric fields are optional: upstream records are occasionally missing
/// hour values, and the engine treats those as zero (a documented leniency
/// that is logged, never an error).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The calendar day this record covers.
    pub work_date: NaiveDate,
    /// Regular hours worked.
    #[serde(default)]
    pub work_hours: Option<Decimal>,
    /// Overtime hours worked.
    #[serde(default)]
    pub overtime_hours: Option<Decimal>,
    /// Night hours worked.
    #[serde(default)]
    pub night_hours: Option<Decimal>,
    /// Whether the day was a holiday.
    #[serde(default)]
    pub is_holiday: bool,
    /// The attendance status for the day.
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Returns true if this record participates in payroll aggregation.
    pub fn is_present(&self) -> bool {
        self.status == AttendanceStatus::Present
    }
}

/// Period totals derived from attendance records.
///
/// Derived, never persisted: the engine recomputes these from the filtered
/// attendance records for each calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// The number of days worked (count of present records).
    pub work_days: u32,
    /// Total regular hours worked.
    pub work_hours: Decimal,
    /// Total overtime hours worked.
    pub overtime_hours: Decimal,
    /// Total night hours worked.
    pub night_hours: Decimal,
    /// Regular hours worked on holidays.
    pub holiday_work_hours: Decimal,
}

impl PeriodTotals {
    /// All-zero totals, the result of aggregating an empty period.
    pub fn zero() -> Self {
        Self {
            work_days: 0,
            work_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            night_hours: Decimal::ZERO,
            holiday_work_hours: Decimal::ZERO,
        }
    }
}
