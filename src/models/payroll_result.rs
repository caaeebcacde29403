//! Payroll result models.
//!
//! This module contains the [`PayrollResult`] record emitted by the
//! assembler, the [`DeductionBreakdown`] of statutory deductions, and the
//! [`CalculationWarning`] type for non-fatal compliance findings.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PayrollStatus, SalaryType};

/// The statutory deduction components for one payroll calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::DeductionBreakdown;
/// use rust_decimal::Decimal;
///
/// let deductions = DeductionBreakdown {
///     pension: Decimal::from(135_000),
///     health_insurance: Decimal::from(106_350),
///     long_term_care: Decimal::from(13_772),
///     employment_insurance: Decimal::from(27_000),
///     income_tax: Decimal::from(100_000),
///     resident_tax: Decimal::from(10_000),
/// };
/// assert_eq!(deductions.total(), Decimal::from(392_122));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// National pension premium.
    pub pension: Decimal,
    /// Health insurance premium.
    pub health_insurance: Decimal,
    /// Long-term care premium (levied on the health premium).
    pub long_term_care: Decimal,
    /// Employment insurance premium.
    pub employment_insurance: Decimal,
    /// Withheld income tax.
    pub income_tax: Decimal,
    /// Resident tax (10% of income tax).
    pub resident_tax: Decimal,
}

impl DeductionBreakdown {
    /// A breakdown with every component at zero.
    pub fn zero() -> Self {
        Self {
            pension: Decimal::ZERO,
            health_insurance: Decimal::ZERO,
            long_term_care: Decimal::ZERO,
            employment_insurance: Decimal::ZERO,
            income_tax: Decimal::ZERO,
            resident_tax: Decimal::ZERO,
        }
    }

    /// The sum of all deduction components.
    pub fn total(&self) -> Decimal {
        self.pension
            + self.health_insurance
            + self.long_term_care
            + self.employment_insurance
            + self.income_tax
            + self.resident_tax
    }
}

/// A non-fatal warning attached to a payroll result.
///
/// Warnings flag findings that need review downstream, such as a failed
/// minimum-wage check, without blocking the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete, immutable result of one payroll calculation.
///
/// One record exists per `(employee_id, pay_period_start, pay_period_end)`;
/// upstream persistence upserts on that natural key. The assembler always
/// produces the record whole, and identical inputs produce byte-identical
/// results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The start of the calculated pay period (inclusive).
    pub pay_period_start: NaiveDate,
    /// The end of the calculated pay period (inclusive).
    pub pay_period_end: NaiveDate,
    /// The scheduled payment date, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    /// Lifecycle status of the record.
    pub status: PayrollStatus,
    /// Free-form notes carried from the calculation input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Whether the contract fixed gross or net pay.
    pub salary_type: SalaryType,

    /// Base pay for the period.
    pub base_pay: Decimal,
    /// Overtime pay.
    pub overtime_pay: Decimal,
    /// Night-shift pay.
    pub night_shift_pay: Decimal,
    /// Holiday-work pay.
    pub holiday_pay: Decimal,
    /// Weekly-rest-day pay (part-time only).
    pub weekly_holiday_pay: Decimal,
    /// Bonus paid this period.
    pub bonus: Decimal,
    /// Special allowance paid this period.
    pub special_allowance: Decimal,
    /// Fixed overtime allowance applied this period.
    pub fixed_overtime_allowance: Decimal,
    /// Non-taxable meal allowance.
    pub meal_allowance: Decimal,
    /// Non-taxable car allowance.
    pub car_allowance: Decimal,
    /// Non-taxable childcare allowance.
    pub childcare_allowance: Decimal,
    /// Sum of the non-taxable allowances.
    pub non_taxable_total: Decimal,

    /// Total pre-tax compensation for the period.
    pub gross_pay: Decimal,
    /// Gross pay minus the non-taxable total.
    pub taxable_income: Decimal,
    /// Statutory deduction components.
    #[serde(flatten)]
    pub deductions: DeductionBreakdown,
    /// Sum of all deduction components.
    pub total_deductions: Decimal,
    /// Take-home amount after all deductions.
    pub net_pay: Decimal,

    /// Whether the effective hourly rate met the statutory minimum wage.
    pub minimum_wage_check: bool,

    /// The contractually fixed net amount (net-guaranteed contracts only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_target: Option<Decimal>,
    /// The solved gross amount (net-guaranteed contracts only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross_calculated: Option<Decimal>,
    /// Solver iterations used (net-guaranteed contracts only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solver_iterations: Option<u32>,
    /// Final solver residual (net-guaranteed contracts only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solver_residual: Option<Decimal>,

    /// Non-fatal warnings raised during calculation.
    #[serde(default)]
    pub warnings: Vec<CalculationWarning>,
}
