//! Payroll assembly.
//!
//! This module is the engine's entry point: it chains contract
//! resolution, attendance aggregation, pay component calculation, the
//! optional net-to-gross solve, statutory deductions, and the
//! minimum-wage check into one immutable [`PayrollResult`].
//!
//! Assembly is a pure function of its explicit inputs, with no clock,
//! no generated identifiers, and no process-wide state, so identical inputs
//! always produce byte-identical results. At-most-one record per
//! `(employee_id, period_start, period_end)` is the caller's storage
//! concern (upsert on the natural key), not an in-process lock.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::StatutoryRateSet;
use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, CalculationWarning, CompensationContract, EmployeeProfile, PayrollInput,
    PayrollResult, SalaryType,
};

use super::attendance_totals::aggregate_attendance;
use super::contract_resolution::resolve_compensation;
use super::deductions::calculate_deductions;
use super::minimum_wage::check_minimum_wage;
use super::net_to_gross::solve_gross_for_net;
use super::pay_components::calculate_pay_components;
use super::rounding::round_currency;

/// Warning code for a failed minimum-wage check.
pub const WARNING_MINIMUM_WAGE: &str = "minimum_wage_floor";

/// Calculates one complete payroll record.
///
/// The caller supplies the per-run input, the employee's contract rows,
/// the optional employee-level salary record, the period's attendance,
/// and the statutory rate set effective for the period.
///
/// # Errors
///
/// - [`EngineError::ContractNotFound`](crate::error::EngineError::ContractNotFound)
///   when no compensation data exists for the employee.
/// - [`EngineError::SolverDidNotConverge`](crate::error::EngineError::SolverDidNotConverge)
///   when a net-guaranteed contract cannot be reconciled within the
///   solver's iteration budget.
pub fn assemble_payroll(
    input: &PayrollInput,
    contracts: &[CompensationContract],
    profile: Option<&EmployeeProfile>,
    attendance: &[AttendanceRecord],
    rates: &StatutoryRateSet,
) -> EngineResult<PayrollResult> {
    let resolved = resolve_compensation(
        &input.employee_id,
        contracts,
        profile,
        &input.pay_period,
    )?;
    let totals = aggregate_attendance(attendance, &input.pay_period);
    let components =
        calculate_pay_components(&totals, &resolved, input.fixed_overtime_override);

    let bonus = round_currency(input.bonus);
    let special_allowance = round_currency(input.special_allowance);
    let extras = bonus + special_allowance + components.fixed_overtime_allowance;
    let worked_extras = components.overtime_pay
        + components.night_shift_pay
        + components.holiday_pay
        + components.weekly_holiday_pay;

    let salary_type = resolved.contract.salary_type;
    let (gross_pay, net_target, gross_calculated, solver_iterations, solver_residual) =
        match salary_type {
            SalaryType::Gross => {
                let gross = components.base_pay
                    + worked_extras
                    + extras
                    + components.non_taxable_total;
                (gross, None, None, None, None)
            }
            SalaryType::Net => {
                // The guaranteed take-home amount for the period is the
                // base pay; only car and childcare allowances ride on top
                // of the solved gross (meal is folded into the target).
                let target = components.base_pay;
                let solution = solve_gross_for_net(
                    target,
                    components.non_taxable_total,
                    input.dependent_count,
                    rates,
                )?;
                let gross = solution.gross
                    + components.car_allowance
                    + components.childcare_allowance
                    + worked_extras
                    + extras;
                (
                    gross,
                    Some(target),
                    Some(solution.gross),
                    Some(solution.iterations),
                    Some(solution.residual),
                )
            }
        };

    let taxable_income = (gross_pay - components.non_taxable_total).max(Decimal::ZERO);
    let deductions = calculate_deductions(taxable_income, input.dependent_count, rates);
    let total_deductions = deductions.total();
    let net_pay = gross_pay - total_deductions;

    let wage_check = check_minimum_wage(
        components.base_pay,
        totals.work_hours,
        rates.minimum_wage_monthly,
    );

    let mut warnings = Vec::new();
    if !wage_check.meets_minimum {
        warn!(
            employee_id = %input.employee_id,
            effective_hourly_rate = %wage_check.effective_hourly_rate,
            minimum_hourly_rate = %wage_check.minimum_hourly_rate,
            "base pay below the statutory minimum wage"
        );
        warnings.push(CalculationWarning {
            code: WARNING_MINIMUM_WAGE.to_string(),
            message: format!(
                "Effective hourly rate {} is below the statutory minimum {}",
                wage_check.effective_hourly_rate.round_dp(2).normalize(),
                wage_check.minimum_hourly_rate.round_dp(2).normalize(),
            ),
            severity: "high".to_string(),
        });
    }

    info!(
        employee_id = %input.employee_id,
        period_start = %input.pay_period.start_date,
        period_end = %input.pay_period.end_date,
        %gross_pay,
        %net_pay,
        "payroll calculation completed"
    );

    Ok(PayrollResult {
        employee_id: input.employee_id.clone(),
        pay_period_start: input.pay_period.start_date,
        pay_period_end: input.pay_period.end_date,
        payment_date: input.payment_date,
        status: input.status,
        notes: input.notes.clone(),
        salary_type,
        base_pay: components.base_pay,
        overtime_pay: components.overtime_pay,
        night_shift_pay: components.night_shift_pay,
        holiday_pay: components.holiday_pay,
        weekly_holiday_pay: components.weekly_holiday_pay,
        bonus,
        special_allowance,
        fixed_overtime_allowance: components.fixed_overtime_allowance,
        meal_allowance: components.meal_allowance,
        car_allowance: components.car_allowance,
        childcare_allowance: components.childcare_allowance,
        non_taxable_total: components.non_taxable_total,
        gross_pay,
        taxable_income,
        deductions,
        total_deductions,
        net_pay,
        minimum_wage_check: wage_check.meets_minimum,
        net_target,
        gross_calculated,
        solver_iterations,
        solver_residual,
        warnings,
    })
}
