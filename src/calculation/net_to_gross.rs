//! Net-to-gross reconciliation.
//!
//! Net-guaranteed contracts fix the take-home amount; this module finds
//! the gross amount whose statutory deductions deliver that net. The
//! solver is standalone and statelessly callable, parameterized by the
//! deduction table, so its convergence behavior is testable in isolation
//! with synthetic tables.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::deductions::{StatutoryDeductions, calculate_deductions};
use super::rounding::round_currency;

/// Hard ceiling on solver iterations; covers bracket expansion and
/// bisection alike.
pub const MAX_SOLVER_ITERATIONS: u32 = 50;

/// Acceptable residual between the recomputed and target net pay.
pub const SOLVER_TOLERANCE: Decimal = Decimal::ONE;

/// A converged net-to-gross solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetToGrossSolution {
    /// The gross amount whose deductions deliver the target net.
    pub gross: Decimal,
    /// The number of residual evaluations performed.
    pub iterations: u32,
    /// The final residual between recomputed and target net pay.
    pub residual: Decimal,
}

/// Finds the gross amount that delivers a fixed net amount.
///
/// Bisects the residual function
/// `f(gross) = gross - non_taxable_total - deductions(gross -
/// non_taxable_total) - net_target`, which is monotone increasing in
/// `gross` for a fixed non-taxable total and dependent count. The lower
/// bound is the net target itself (deductions are non-negative); the
/// upper bound starts at twice the target and doubles until it brackets
/// the root.
///
/// Terminates when the residual is within [`SOLVER_TOLERANCE`] or the
/// iteration budget [`MAX_SOLVER_ITERATIONS`] is spent. Running out of
/// budget is a hard failure; the solver never returns a best-effort
/// guess.
///
/// # Errors
///
/// - [`EngineError::CalculationError`] when `net_target` is not positive.
/// - [`EngineError::SolverDidNotConverge`] when the budget is exhausted,
///   carrying the iteration count and final residual for audit.
pub fn solve_gross_for_net(
    net_target: Decimal,
    non_taxable_total: Decimal,
    dependent_count: u32,
    table: &impl StatutoryDeductions,
) -> EngineResult<NetToGrossSolution> {
    if net_target <= Decimal::ZERO {
        return Err(EngineError::CalculationError {
            message: format!("net target must be positive, got {}", net_target),
        });
    }

    let residual_at = |gross: Decimal| -> Decimal {
        let taxable = (gross - non_taxable_total).max(Decimal::ZERO);
        let deductions = calculate_deductions(taxable, dependent_count, table);
        gross - non_taxable_total - deductions.total() - net_target
    };

    let mut iterations: u32 = 0;
    let mut lo = net_target;
    let mut hi = net_target * Decimal::TWO;

    // Expand the upper bound until it clears the target.
    let mut residual = residual_at(hi);
    iterations += 1;
    while residual < Decimal::ZERO {
        if residual.abs() <= SOLVER_TOLERANCE {
            return Ok(finish(hi, iterations, residual));
        }
        if iterations >= MAX_SOLVER_ITERATIONS {
            return Err(EngineError::SolverDidNotConverge {
                iterations,
                residual,
            });
        }
        lo = hi;
        hi *= Decimal::TWO;
        residual = residual_at(hi);
        iterations += 1;
    }
    if residual.abs() <= SOLVER_TOLERANCE {
        return Ok(finish(hi, iterations, residual));
    }

    // Bisect the bracketed interval.
    while iterations < MAX_SOLVER_ITERATIONS {
        let mid = round_currency((lo + hi) / Decimal::TWO);
        residual = residual_at(mid);
        iterations += 1;

        if residual.abs() <= SOLVER_TOLERANCE {
            return Ok(finish(mid, iterations, residual));
        }
        if residual < Decimal::ZERO {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Err(EngineError::SolverDidNotConverge {
        iterations,
        residual,
    })
}

fn finish(gross: Decimal, iterations: u32, residual: Decimal) -> NetToGrossSolution {
    debug!(%gross, iterations, %residual, "net-to-gross solver converged");
    NetToGrossSolution {
        gross,
        iterations,
        residual,
    }
}
