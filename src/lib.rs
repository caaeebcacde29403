//! Payroll Calculation Engine for Korean statutory payroll.
//!
//! This crate turns a pay period's attendance data and an employee's
//! compensation contract into a fully itemized payroll record: pay
//! components derived from attendance, statutory deductions, a
//! minimum-wage compliance check and, for net-guaranteed contracts, an
//! iterative reconciliation that finds the gross amount whose deductions
//! deliver a contractually fixed net amount.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
