//! Calculation logic for the payroll engine.
//!
//! This module contains all the calculation stages for producing a payroll
//! record: attendance aggregation, compensation contract resolution, pay
//! component calculation, weekly-rest-day pay, statutory deductions, the
//! net-to-gross solver, the minimum-wage check, and the final assembly.

mod attendance_totals;
mod contract_resolution;
mod deductions;
mod minimum_wage;
mod net_to_gross;
mod pay_components;
mod payroll_assembly;
mod rounding;
mod weekly_rest;

pub use attendance_totals::aggregate_attendance;
pub use contract_resolution::{
    FULL_TIME_MONTHLY_HOURS, ResolutionSource, ResolvedCompensation, resolve_compensation,
};
pub use deductions::{RESIDENT_TAX_RATE, StatutoryDeductions, calculate_deductions};
pub use minimum_wage::{MinimumWageCheck, check_minimum_wage};
pub use net_to_gross::{
    MAX_SOLVER_ITERATIONS, NetToGrossSolution, SOLVER_TOLERANCE, solve_gross_for_net,
};
pub use pay_components::{PayComponents, calculate_pay_components};
pub use payroll_assembly::{WARNING_MINIMUM_WAGE, assemble_payroll};
pub use rounding::round_currency;
pub use weekly_rest::{MIN_AVG_WEEKLY_HOURS, calculate_weekly_rest_pay};
