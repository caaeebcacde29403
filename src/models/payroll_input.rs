//! Payroll calculation input contract.
//!
//! This module defines the [`PayrollInput`] the caller assembles from the
//! attendance/HR collaborator before invoking the engine, together with the
//! [`PayrollStatus`] lifecycle enum carried through to the result.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// Lifecycle status of a payroll record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// Calculated but not yet reviewed.
    #[default]
    Draft,
    /// Reviewed and approved for payment.
    Approved,
    /// Paid out.
    Paid,
}

/// The caller-supplied input for one payroll calculation.
///
/// The caller fetches the employee's contracts and the period's filtered
/// attendance records separately; this struct carries the per-run knobs.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayrollInput, PayrollStatus};
///
/// let json = r#"{
///     "employee_id": "emp_001",
///     "pay_period": { "start_date": "2025-06-01", "end_date": "2025-06-30" }
/// }"#;
/// let input: PayrollInput = serde_json::from_str(json).unwrap();
/// assert_eq!(input.status, PayrollStatus::Draft);
/// assert_eq!(input.dependent_count, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// The employee to calculate payroll for.
    pub employee_id: String,
    /// The pay period to calculate.
    pub pay_period: PayPeriod,
    /// The scheduled payment date, if known.
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
    /// Bonus paid this period.
    #[serde(default)]
    pub bonus: Decimal,
    /// Special allowance paid this period.
    #[serde(default)]
    pub special_allowance: Decimal,
    /// Caller-supplied fixed overtime allowance; overrides the contract's
    /// stored value when present.
    #[serde(default)]
    pub fixed_overtime_override: Option<Decimal>,
    /// Number of dependents for income-tax withholding.
    #[serde(default)]
    pub dependent_count: u32,
    /// Lifecycle status to stamp on the result.
    #[serde(default)]
    pub status: PayrollStatus,
    /// Free-form notes carried through to the result.
    #[serde(default)]
    pub notes: Option<String>,
}
