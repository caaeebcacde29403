//! Statutory rate configuration for the payroll calculation engine.
//!
//! Rate tables are loaded from YAML files, versioned by effective date,
//! and passed explicitly into calculations.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    InsuranceRates, StatutoryConfig, StatutoryMetadata, StatutoryRateSet, TaxBracket,
};
