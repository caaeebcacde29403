//! Compensation contract models.
//!
//! This module defines the [`CompensationContract`] record that governs how
//! an employee is paid for a period, together with the [`SalaryType`]
//! classification and the simpler employee-level [`EmployeeProfile`] used as
//! a last-resort fallback when no contract rows exist.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a contract fixes the gross or the net side of pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryType {
    /// The contract specifies gross pay; net pay falls out of deductions.
    Gross,
    /// The contract guarantees net pay; gross pay must be back-solved.
    Net,
}

/// A compensation contract effective for a date range.
///
/// At most one contract is active for a given employee and date. Selection
/// and fallback rules live in
/// [`resolve_compensation`](crate::calculation::resolve_compensation).
///
/// # Example
///
/// ```
/// use payroll_engine::models::{CompensationContract, SalaryType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let contract = CompensationContract {
///     employee_id: "emp_001".to_string(),
///     salary_type: SalaryType::Gross,
///     base_salary: Decimal::from(3_000_000),
///     hourly_rate: None,
///     overtime_rate: Decimal::new(15, 1),
///     night_shift_rate: Decimal::new(15, 1),
///     holiday_rate: Decimal::from(2),
///     meal_allowance: Decimal::from(100_000),
///     car_allowance: Decimal::ZERO,
///     childcare_allowance: Decimal::ZERO,
///     fixed_overtime_pay: Decimal::ZERO,
///     effective_from: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     effective_to: None,
/// };
/// assert!(contract.is_open_ended());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationContract {
    /// The employee this contract belongs to.
    pub employee_id: String,
    /// Whether gross or net pay is the contractually fixed quantity.
    pub salary_type: SalaryType,
    /// Monthly base salary; zero for purely hourly contracts.
    #[serde(default)]
    pub base_salary: Decimal,
    /// Explicit hourly rate; derived from the base salary when absent.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Overtime pay multiplier.
    #[serde(default = "default_overtime_rate")]
    pub overtime_rate: Decimal,
    /// Night-shift pay multiplier.
    #[serde(default = "default_night_shift_rate")]
    pub night_shift_rate: Decimal,
    /// Holiday-work pay multiplier.
    #[serde(default = "default_holiday_rate")]
    pub holiday_rate: Decimal,
    /// Non-taxable meal allowance per period.
    #[serde(default)]
    pub meal_allowance: Decimal,
    /// Non-taxable car allowance per period.
    #[serde(default)]
    pub car_allowance: Decimal,
    /// Non-taxable childcare allowance per period.
    #[serde(default)]
    pub childcare_allowance: Decimal,
    /// Contractual flat overtime allowance per period.
    #[serde(default)]
    pub fixed_overtime_pay: Decimal,
    /// The first date this contract is effective (inclusive).
    pub effective_from: NaiveDate,
    /// The last date this contract is effective (inclusive); None for
    /// open-ended contracts.
    #[serde(default)]
    pub effective_to: Option<NaiveDate>,
}

impl CompensationContract {
    /// Returns true if the contract has no end date.
    pub fn is_open_ended(&self) -> bool {
        self.effective_to.is_none()
    }

    /// Returns true if the contract guarantees net pay.
    pub fn is_net_guaranteed(&self) -> bool {
        self.salary_type == SalaryType::Net
    }

    /// Derives a synthetic contract from an employee-level salary record.
    ///
    /// Used when an employee has no contract rows at all: the profile's
    /// salary fields are carried over, multipliers take their statutory
    /// defaults, and allowances are zero.
    pub fn from_profile(profile: &EmployeeProfile, effective_from: NaiveDate) -> Self {
        Self {
            employee_id: profile.employee_id.clone(),
            salary_type: profile.salary_type,
            base_salary: profile.base_salary,
            hourly_rate: profile.hourly_rate,
            overtime_rate: default_overtime_rate(),
            night_shift_rate: default_night_shift_rate(),
            holiday_rate: default_holiday_rate(),
            meal_allowance: Decimal::ZERO,
            car_allowance: Decimal::ZERO,
            childcare_allowance: Decimal::ZERO,
            fixed_overtime_pay: Decimal::ZERO,
            effective_from,
            effective_to: None,
        }
    }
}

/// The simpler employee-level salary record.
///
/// When an employee has no contract rows at all, a synthetic contract is
/// derived from this record with default multipliers and no allowances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// The employee this profile belongs to.
    pub employee_id: String,
    /// Whether gross or net pay is the fixed quantity.
    pub salary_type: SalaryType,
    /// Monthly base salary; zero for purely hourly employees.
    #[serde(default)]
    pub base_salary: Decimal,
    /// Explicit hourly rate, if any.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
}

fn default_overtime_rate() -> Decimal {
    Decimal::new(15, 1)
}

fn default_night_shift_rate() -> Decimal {
    Decimal::new(15, 1)
}

fn default_holiday_rate() -> Decimal {
    Decimal::from(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_contract() -> CompensationContract {
        CompensationContract {
            employee_id: "emp_001".to_string(),
            salary_type: SalaryType::Gross,
            base_salary: dec("3000000"),
            hourly_rate: None,
            overtime_rate: dec("1.5"),
            night_shift_rate: dec("1.5"),
            holiday_rate: dec("2.0"),
            meal_allowance: dec("100000"),
            car_allowance: dec("0"),
            childcare_allowance: dec("0"),
            fixed_overtime_pay: dec("0"),
            effective_from: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            effective_to: None,
        }
    }

    #[test]
    fn test_salary_type_serialization() {
        assert_eq!(
            serde_json::to_string(&SalaryType::Gross).unwrap(),
            "\"gross\""
        );
        assert_eq!(serde_json::to_string(&SalaryType::Net).unwrap(), "\"net\"");
    }

    #[test]
    fn test_deserialize_contract_with_defaults() {
        let json = r#"{
            "employee_id": "emp_001",
            "salary_type": "gross",
            "base_salary": "3000000",
            "effective_from": "2025-01-01"
        }"#;

        let contract: CompensationContract = serde_json::from_str(json).unwrap();
        assert_eq!(contract.employee_id, "emp_001");
        assert_eq!(contract.salary_type, SalaryType::Gross);
        assert_eq!(contract.base_salary, dec("3000000"));
        assert_eq!(contract.hourly_rate, None);
        assert_eq!(contract.overtime_rate, dec("1.5"));
        assert_eq!(contract.night_shift_rate, dec("1.5"));
        assert_eq!(contract.holiday_rate, dec("2"));
        assert_eq!(contract.meal_allowance, Decimal::ZERO);
        assert_eq!(contract.fixed_overtime_pay, Decimal::ZERO);
        assert_eq!(contract.effective_to, None);
    }

    #[test]
    fn test_deserialize_hourly_contract() {
        let json = r#"{
            "employee_id": "emp_002",
            "salary_type": "gross",
            "hourly_rate": "10000",
            "effective_from": "2025-03-01",
            "effective_to": "2025-12-31"
        }"#;

        let contract: CompensationContract = serde_json::from_str(json).unwrap();
        assert_eq!(contract.base_salary, Decimal::ZERO);
        assert_eq!(contract.hourly_rate, Some(dec("10000")));
        assert_eq!(
            contract.effective_to,
            Some(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap())
        );
        assert!(!contract.is_open_ended());
    }

    #[test]
    fn test_serialize_contract_round_trip() {
        let contract = create_test_contract();
        let json = serde_json::to_string(&contract).unwrap();
        let deserialized: CompensationContract = serde_json::from_str(&json).unwrap();
        assert_eq!(contract, deserialized);
    }

    #[test]
    fn test_is_open_ended() {
        let mut contract = create_test_contract();
        assert!(contract.is_open_ended());

        contract.effective_to = Some(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
        assert!(!contract.is_open_ended());
    }

    #[test]
    fn test_is_net_guaranteed() {
        let mut contract = create_test_contract();
        assert!(!contract.is_net_guaranteed());

        contract.salary_type = SalaryType::Net;
        assert!(contract.is_net_guaranteed());
    }

    #[test]
    fn test_deserialize_employee_profile() {
        let json = r#"{
            "employee_id": "emp_003",
            "salary_type": "net",
            "base_salary": "2500000"
        }"#;

        let profile: EmployeeProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.employee_id, "emp_003");
        assert_eq!(profile.salary_type, SalaryType::Net);
        assert_eq!(profile.base_salary, dec("2500000"));
        assert_eq!(profile.hourly_rate, None);
    }
}
