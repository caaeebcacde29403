//! Pay component calculation.
//!
//! This module computes the itemized pay components for a period (base
//! pay, overtime, night-shift, holiday, and weekly-rest-day pay) from
//! the aggregated attendance and the resolved compensation.

use rust_decimal::Decimal;

use crate::models::PeriodTotals;

use super::contract_resolution::ResolvedCompensation;
use super::rounding::round_currency;
use super::weekly_rest::calculate_weekly_rest_pay;

/// The itemized pay components for one pay period.
///
/// All monetary amounts are rounded to whole currency units, so totals
/// built by summing components reconcile exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayComponents {
    /// Base pay: hours x rate for part-time, the fixed salary otherwise.
    pub base_pay: Decimal,
    /// Overtime pay at the contract multiplier.
    pub overtime_pay: Decimal,
    /// Night-shift pay at the contract multiplier.
    pub night_shift_pay: Decimal,
    /// Holiday-work pay at the contract multiplier.
    pub holiday_pay: Decimal,
    /// Weekly-rest-day pay (part-time only).
    pub weekly_holiday_pay: Decimal,
    /// The applied fixed overtime allowance.
    pub fixed_overtime_allowance: Decimal,
    /// Non-taxable meal allowance.
    pub meal_allowance: Decimal,
    /// Non-taxable car allowance.
    pub car_allowance: Decimal,
    /// Non-taxable childcare allowance.
    pub childcare_allowance: Decimal,
    /// Sum of the non-taxable allowances.
    pub non_taxable_total: Decimal,
}

impl PayComponents {
    /// Sum of the attendance-derived pay components.
    pub fn worked_pay_total(&self) -> Decimal {
        self.base_pay
            + self.overtime_pay
            + self.night_shift_pay
            + self.holiday_pay
            + self.weekly_holiday_pay
    }
}

/// Calculates the pay components for a period.
///
/// Part-time employees earn `work_hours x hourly_rate` as base pay and are
/// assessed for weekly-rest-day pay; salaried employees receive the fixed
/// base salary regardless of hours logged. Overtime, night, and holiday
/// pay apply to both, at the contract multipliers.
///
/// The fixed overtime allowance resolves with explicit precedence: the
/// caller-supplied override when present, else the contract's stored
/// amount.
pub fn calculate_pay_components(
    totals: &PeriodTotals,
    resolved: &ResolvedCompensation,
    fixed_overtime_override: Option<Decimal>,
) -> PayComponents {
    let contract = &resolved.contract;
    let rate = resolved.hourly_rate;

    let base_pay = if resolved.is_part_time {
        round_currency(totals.work_hours * rate)
    } else {
        round_currency(contract.base_salary)
    };

    let overtime_pay = round_currency(totals.overtime_hours * rate * contract.overtime_rate);
    let night_shift_pay = round_currency(totals.night_hours * rate * contract.night_shift_rate);
    let holiday_pay = round_currency(totals.holiday_work_hours * rate * contract.holiday_rate);

    let weekly_holiday_pay = if resolved.is_part_time {
        calculate_weekly_rest_pay(totals, rate)
    } else {
        Decimal::ZERO
    };

    let fixed_overtime_allowance =
        round_currency(fixed_overtime_override.unwrap_or(contract.fixed_overtime_pay));

    let meal_allowance = round_currency(contract.meal_allowance);
    let car_allowance = round_currency(contract.car_allowance);
    let childcare_allowance = round_currency(contract.childcare_allowance);
    let non_taxable_total = meal_allowance + car_allowance + childcare_allowance;

    PayComponents {
        base_pay,
        overtime_pay,
        night_shift_pay,
        holiday_pay,
        weekly_holiday_pay,
        fixed_overtime_allowance,
        meal_allowance,
        car_allowance,
        childcare_allowance,
        non_taxable_total,
    }
}
