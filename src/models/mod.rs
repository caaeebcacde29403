//! Core data models for the payroll calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod contract;
mod pay_period;
mod payroll_input;
mod payroll_result;

pub use attendance::{AttendanceRecord, AttendanceStatus, PeriodTotals};
pub use contract::{CompensationContract, EmployeeProfile, SalaryType};
pub use pay_period::PayPeriod;
pub use payroll_input::{PayrollInput, PayrollStatus};
pub use payroll_result::{CalculationWarning, DeductionBreakdown, PayrollResult};
