//! Compensation contract resolution.
//!
//! This module determines which compensation contract applies to a pay
//! period, derives the effective hourly rate, and classifies the employee
//! as hourly (part-time) or salaried.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationContract, EmployeeProfile, PayPeriod};

/// The standard monthly full-time hour base (Korean statutory constant).
///
/// Used to derive an hourly rate from a monthly base salary and to assess
/// the minimum-wage floor for salaried employees with no logged hours.
pub const FULL_TIME_MONTHLY_HOURS: Decimal = Decimal::from_parts(209, 0, 0, false, 0);

/// Which resolution strategy produced the applicable contract.
///
/// Strategies are evaluated in declaration order; each is independently
/// testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// A contract whose effective range overlaps the pay period.
    ActiveContract,
    /// No contract overlapped the period; the latest contract by
    /// effective date was used as a fallback.
    LatestContract,
    /// No contract rows existed; a synthetic contract was derived from
    /// the employee-level salary record.
    EmployeeProfile,
}

/// The outcome of contract resolution for one pay period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCompensation {
    /// The applicable contract (possibly synthetic).
    pub contract: CompensationContract,
    /// The effective hourly rate: the contract's explicit rate if present,
    /// else `base_salary / 209` when a base salary exists, else zero.
    pub hourly_rate: Decimal,
    /// True when the employee is paid purely by the hour.
    pub is_part_time: bool,
    /// Which strategy produced the contract.
    pub source: ResolutionSource,
}

/// Resolves the compensation contract applicable to a pay period.
///
/// Strategies are tried in order:
///
/// 1. **Active contract**: the latest contract (by `effective_from`)
///    whose `effective_from` is on or before the period end and whose
///    `effective_to` is absent or on or after the period start.
/// 2. **Latest contract**: when none is active, the latest contract by
///    `effective_from`.
/// 3. **Employee profile**: when no contract rows exist, a synthetic
///    contract derived from the employee-level salary record.
///
/// # Errors
///
/// Returns [`EngineError::ContractNotFound`] when no contract and no
/// employee-level salary record exist.
pub fn resolve_compensation(
    employee_id: &str,
    contracts: &[CompensationContract],
    profile: Option<&EmployeeProfile>,
    period: &PayPeriod,
) -> EngineResult<ResolvedCompensation> {
    let (contract, source) = select_contract(employee_id, contracts, profile, period)?;

    let hourly_rate = effective_hourly_rate(&contract);
    let is_part_time = contract.base_salary == Decimal::ZERO && hourly_rate > Decimal::ZERO;

    debug!(
        employee_id,
        source = ?source,
        %hourly_rate,
        is_part_time,
        "resolved compensation contract"
    );

    Ok(ResolvedCompensation {
        contract,
        hourly_rate,
        is_part_time,
        source,
    })
}

fn select_contract(
    employee_id: &str,
    contracts: &[CompensationContract],
    profile: Option<&EmployeeProfile>,
    period: &PayPeriod,
) -> EngineResult<(CompensationContract, ResolutionSource)> {
    if let Some(active) = contracts
        .iter()
        .filter(|c| {
            c.effective_from <= period.end_date
                && c.effective_to.is_none_or(|to| to >= period.start_date)
        })
        .max_by_key(|c| c.effective_from)
    {
        return Ok((active.clone(), ResolutionSource::ActiveContract));
    }

    if let Some(latest) = contracts.iter().max_by_key(|c| c.effective_from) {
        return Ok((latest.clone(), ResolutionSource::LatestContract));
    }

    if let Some(profile) = profile {
        let synthetic = CompensationContract::from_profile(profile, period.start_date);
        return Ok((synthetic, ResolutionSource::EmployeeProfile));
    }

    Err(EngineError::ContractNotFound {
        employee_id: employee_id.to_string(),
    })
}

/// Derives the effective hourly rate for a contract.
fn effective_hourly_rate(contract: &CompensationContract) -> Decimal {
    match contract.hourly_rate {
        Some(rate) => rate,
        None if contract.base_salary > Decimal::ZERO => {
            contract.base_salary / FULL_TIME_MONTHLY_HOURS
        }
        None => Decimal::ZERO,
    }
}
