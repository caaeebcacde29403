//! Configuration types for statutory payroll rates.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML rate-table files. Rate sets are versioned by
//! effective date and always passed explicitly into calculations; the
//! engine keeps no process-wide rate state.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the statutory rate tables.
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryMetadata {
    /// The human-readable name of the rate tables.
    pub name: String,
    /// The version or reference year of the tables.
    pub version: String,
    /// URL to the official source of the rates.
    pub source_url: String,
}

/// Employee-share social insurance percentages.
#[derive(Debug, Clone, Deserialize)]
pub struct InsuranceRates {
    /// National pension premium rate on taxable income.
    pub pension_rate: Decimal,
    /// Health insurance premium rate on taxable income.
    pub health_insurance_rate: Decimal,
    /// Long-term care rate, levied on the health premium.
    pub long_term_care_rate: Decimal,
    /// Employment insurance premium rate on taxable income.
    pub employment_insurance_rate: Decimal,
}

/// One monthly withholding bracket.
///
/// Brackets are continuous piecewise-linear: for taxable income `t` in the
/// bracket, tax is `t x rate - subtract`, floored at zero.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBracket {
    /// The bracket applies when taxable income exceeds this amount.
    pub over: Decimal,
    /// The marginal rate for the bracket.
    pub rate: Decimal,
    /// The progressive subtraction keeping the schedule continuous.
    pub subtract: Decimal,
}

/// The statutory rates effective from a specific date.
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryRateSet {
    /// The effective date for this rate set.
    pub effective_date: NaiveDate,
    /// Social insurance percentages.
    pub insurance: InsuranceRates,
    /// Monthly income-tax withholding brackets, sorted ascending by `over`.
    pub tax_brackets: Vec<TaxBracket>,
    /// Monthly taxable-income deduction per dependent.
    pub dependent_monthly_deduction: Decimal,
    /// Statutory monthly minimum wage at the full-time hour base.
    pub minimum_wage_monthly: Decimal,
}

/// The complete statutory configuration loaded from YAML files.
///
/// Aggregates the metadata and all effective-dated rate sets.
#[derive(Debug, Clone)]
pub struct StatutoryConfig {
    /// Rate table metadata.
    metadata: StatutoryMetadata,
    /// Rate sets by effective date (sorted oldest first).
    rate_sets: Vec<StatutoryRateSet>,
}

impl StatutoryConfig {
    /// Creates a new StatutoryConfig from its component parts.
    pub fn new(metadata: StatutoryMetadata, rate_sets: Vec<StatutoryRateSet>) -> Self {
        let mut sorted = rate_sets;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            rate_sets: sorted,
        }
    }

    /// Returns the rate table metadata.
    pub fn metadata(&self) -> &StatutoryMetadata {
        &self.metadata
    }

    /// Returns all rate sets, sorted ascending by effective date.
    pub fn rate_sets(&self) -> &[StatutoryRateSet] {
        &self.rate_sets
    }

    /// Returns the most recent rate set effective on or before the date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RateSetNotFound`] when no rate set is
    /// effective on or before the given date.
    pub fn rate_set_for(&self, date: NaiveDate) -> EngineResult<&StatutoryRateSet> {
        self.rate_sets
            .iter()
            .rfind(|r| r.effective_date <= date)
            .ok_or(EngineError::RateSetNotFound { date })
    }
}
