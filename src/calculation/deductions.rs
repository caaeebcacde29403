//! Statutory deduction calculation.
//!
//! The statutory rate tables are external inputs: this module defines the
//! pure-function contract they must satisfy ([`StatutoryDeductions`]),
//! provides the table-backed implementation on
//! [`StatutoryRateSet`](crate::config::StatutoryRateSet), and orchestrates
//! one full deduction pass per calculation. Resident tax is always
//! computed locally as 10% of income tax, never delegated to the table.

use rust_decimal::Decimal;

use crate::config::StatutoryRateSet;
use crate::models::DeductionBreakdown;

use super::rounding::round_currency;

/// Resident tax as a fraction of withheld income tax.
pub const RESIDENT_TAX_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// The pure-function contract for statutory deduction lookups.
///
/// Implementations must be pure: the same inputs always produce the same
/// premiums, with no hidden state. The engine ships a table-backed
/// implementation; tests substitute synthetic ones.
pub trait StatutoryDeductions {
    /// National pension premium for the given taxable income.
    fn pension(&self, taxable_income: Decimal) -> Decimal;
    /// Health insurance premium for the given taxable income.
    fn health_insurance(&self, taxable_income: Decimal) -> Decimal;
    /// Long-term care premium, levied on the health premium.
    fn long_term_care(&self, health_insurance: Decimal) -> Decimal;
    /// Employment insurance premium for the given taxable income.
    fn employment_insurance(&self, taxable_income: Decimal) -> Decimal;
    /// Monthly withheld income tax for the given taxable income and
    /// dependent count.
    fn income_tax(&self, taxable_income: Decimal, dependent_count: u32) -> Decimal;
}

/// Runs one full deduction pass over a taxable income.
///
/// Each premium is rounded to whole currency units as it is produced, and
/// `resident_tax = round(income_tax x 0.10)` is computed here. Negative
/// taxable income is clamped to zero before any lookup.
pub fn calculate_deductions(
    taxable_income: Decimal,
    dependent_count: u32,
    table: &impl StatutoryDeductions,
) -> DeductionBreakdown {
    let taxable = taxable_income.max(Decimal::ZERO);

    let pension = round_currency(table.pension(taxable));
    let health_insurance = round_currency(table.health_insurance(taxable));
    let long_term_care = round_currency(table.long_term_care(health_insurance));
    let employment_insurance = round_currency(table.employment_insurance(taxable));
    let income_tax = round_currency(table.income_tax(taxable, dependent_count));
    let resident_tax = round_currency(income_tax * RESIDENT_TAX_RATE);

    DeductionBreakdown {
        pension,
        health_insurance,
        long_term_care,
        employment_insurance,
        income_tax,
        resident_tax,
    }
}

impl StatutoryDeductions for StatutoryRateSet {
    fn pension(&self, taxable_income: Decimal) -> Decimal {
        taxable_income * self.insurance.pension_rate
    }

    fn health_insurance(&self, taxable_income: Decimal) -> Decimal {
        taxable_income * self.insurance.health_insurance_rate
    }

    fn long_term_care(&self, health_insurance: Decimal) -> Decimal {
        health_insurance * self.insurance.long_term_care_rate
    }

    fn employment_insurance(&self, taxable_income: Decimal) -> Decimal {
        taxable_income * self.insurance.employment_insurance_rate
    }

    fn income_tax(&self, taxable_income: Decimal, dependent_count: u32) -> Decimal {
        let relieved = (taxable_income
            - self.dependent_monthly_deduction * Decimal::from(dependent_count))
        .max(Decimal::ZERO);

        let bracket = self
            .tax_brackets
            .iter()
            .rfind(|b| relieved > b.over);

        match bracket {
            Some(b) => (relieved * b.rate - b.subtract).max(Decimal::ZERO),
            None => Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InsuranceRates, TaxBracket};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn reference_rate_set() -> StatutoryRateSet {
        StatutoryRateSet {
            effective_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            insurance: InsuranceRates {
                pension_rate: dec("0.045"),
                health_insurance_rate: dec("0.03545"),
                long_term_care_rate: dec("0.1295"),
                employment_insurance_rate: dec("0.009"),
            },
            tax_brackets: vec![
                TaxBracket {
                    over: dec("0"),
                    rate: dec("0"),
                    subtract: dec("0"),
                },
                TaxBracket {
                    over: dec("1060000"),
                    rate: dec("0.06"),
                    subtract: dec("63600"),
                },
                TaxBracket {
                    over: dec("3830000"),
                    rate: dec("0.15"),
                    subtract: dec("408300"),
                },
            ],
            dependent_monthly_deduction: dec("150000"),
            minimum_wage_monthly: dec("2156880"),
        }
    }

    #[test]
    fn test_insurance_premiums_for_reference_income() {
        let table = reference_rate_set();
        let breakdown = calculate_deductions(dec("3000000"), 0, &table);

        assert_eq!(breakdown.pension, dec("135000"));
        assert_eq!(breakdown.health_insurance, dec("106350"));
        // 106,350 x 0.1295 = 13,772.3... -> 13,772
        assert_eq!(breakdown.long_term_care, dec("13772"));
        assert_eq!(breakdown.employment_insurance, dec("27000"));
    }

    #[test]
    fn test_income_tax_uses_bracket_schedule() {
        let table = reference_rate_set();
        // 3,000,000 taxable, no dependents: 3,000,000 x 0.06 - 63,600.
        assert_eq!(table.income_tax(dec("3000000"), 0), dec("116400"));
    }

    #[test]
    fn test_income_tax_dependent_relief() {
        let table = reference_rate_set();
        // One dependent shifts taxable to 2,850,000: x 0.06 - 63,600.
        assert_eq!(table.income_tax(dec("3000000"), 1), dec("107400"));
    }

    #[test]
    fn test_income_tax_below_first_threshold_is_zero() {
        let table = reference_rate_set();
        assert_eq!(table.income_tax(dec("900000"), 0), Decimal::ZERO);
    }

    #[test]
    fn test_income_tax_continuous_at_bracket_boundary() {
        let table = reference_rate_set();
        // At the 3,830,000 boundary both bracket formulas agree.
        let below = table.income_tax(dec("3830000"), 0);
        assert_eq!(below, dec("166200"));
    }

    #[test]
    fn test_resident_tax_is_ten_percent_of_income_tax() {
        let table = reference_rate_set();
        let breakdown = calculate_deductions(dec("3000000"), 0, &table);

        assert_eq!(breakdown.income_tax, dec("116400"));
        assert_eq!(breakdown.resident_tax, dec("11640"));
    }

    #[test]
    fn test_all_components_rounded_to_whole_currency() {
        let table = reference_rate_set();
        let breakdown = calculate_deductions(dec("3333333"), 0, &table);

        assert_eq!(breakdown.pension.scale(), 0);
        assert_eq!(breakdown.health_insurance.scale(), 0);
        assert_eq!(breakdown.long_term_care.scale(), 0);
        assert_eq!(breakdown.employment_insurance.scale(), 0);
        assert_eq!(breakdown.income_tax.scale(), 0);
        assert_eq!(breakdown.resident_tax.scale(), 0);
    }

    #[test]
    fn test_zero_taxable_income_yields_zero_deductions() {
        let table = reference_rate_set();
        let breakdown = calculate_deductions(Decimal::ZERO, 2, &table);
        assert_eq!(breakdown.total(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_taxable_income_clamped_to_zero() {
        let table = reference_rate_set();
        let breakdown = calculate_deductions(dec("-500000"), 0, &table);
        assert_eq!(breakdown.total(), Decimal::ZERO);
    }

    #[test]
    fn test_dependent_relief_never_goes_negative() {
        let table = reference_rate_set();
        // 10 dependents push relieved income below zero; tax clamps at 0.
        assert_eq!(table.income_tax(dec("1000000"), 10), Decimal::ZERO);
    }

    #[test]
    fn test_synthetic_table_through_orchestration() {
        struct FlatTenPercent;

        impl StatutoryDeductions for FlatTenPercent {
            fn pension(&self, _t: Decimal) -> Decimal {
                Decimal::ZERO
            }
            fn health_insurance(&self, _t: Decimal) -> Decimal {
                Decimal::ZERO
            }
            fn long_term_care(&self, _h: Decimal) -> Decimal {
                Decimal::ZERO
            }
            fn employment_insurance(&self, _t: Decimal) -> Decimal {
                Decimal::ZERO
            }
            fn income_tax(&self, t: Decimal, _d: u32) -> Decimal {
                t * Decimal::new(1, 1)
            }
        }

        let breakdown = calculate_deductions(dec("1000000"), 0, &FlatTenPercent);
        assert_eq!(breakdown.income_tax, dec("100000"));
        assert_eq!(breakdown.resident_tax, dec("10000"));
        assert_eq!(breakdown.total(), dec("110000"));
    }
}
