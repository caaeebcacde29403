//! Error types for the payroll calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a payroll calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ContractNotFound {
///     employee_id: "emp_042".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "No compensation data found for employee 'emp_042'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No statutory rate set is effective for the given date.
    #[error("No statutory rate set effective on {date}")]
    RateSetNotFound {
        /// The date for which rates were requested.
        date: NaiveDate,
    },

    /// Neither a compensation contract nor a fallback employee-level
    /// salary record exists for the employee.
    #[error("No compensation data found for employee '{employee_id}'")]
    ContractNotFound {
        /// The employee whose compensation could not be resolved.
        employee_id: String,
    },

    /// The net-to-gross solver exhausted its iteration budget without
    /// reconciling the target net pay.
    #[error(
        "Net-to-gross solver did not converge after {iterations} iterations (residual {residual})"
    )]
    SolverDidNotConverge {
        /// The number of iterations performed before giving up.
        iterations: u32,
        /// The final residual between the recomputed and target net pay.
        residual: Decimal,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
