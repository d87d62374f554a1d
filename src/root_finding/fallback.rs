//! Fallback protocol shared by derivative-aware solvers.
//!
//! When a Newton or Halley step is unsafe the solver stops iterating and
//! hands the problem to a bracketing solver:
//! - the fallback is built with the *remaining* budget
//!   (`max_evaluations - evaluations`),
//! - it solves over the original bracket with the same `x_accuracy`,
//! - its result (or its `NonConvergence`) is final. Delegation is terminal.

use super::algorithms::{Algorithm, BracketFamily};
use super::brent::Brent;
use super::errors::RootFindingError;
use super::objective::ObjectiveFunction;
use super::report::{FallbackReason, RootFindingReport, Termination};
use super::ridder::Ridder;
use super::solver::Solver1D;
use super::state::SolverState;


/// Bracketing solver used as a safety net.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Fallback {
    #[default]
    Brent,
    Ridder,
}
impl Fallback {
    pub const fn algorithm(self) -> Algorithm {
        match self {
            Fallback::Brent  => Algorithm::Bracket(BracketFamily::Brent),
            Fallback::Ridder => Algorithm::Bracket(BracketFamily::Ridder),
        }
    }
}


/// Hands the solve over to `fallback`.
///
/// # Arguments
/// - `caller`   : algorithm that gave up (reported in the result)
/// - `fallback` : bracketing solver to construct
/// - `f`        : objective, value-only use from here on
/// - `state`    : caller's state; its bracket is the original one
/// - `guess`    : starting point for the fallback
/// - `reason`   : why the caller delegated
pub(crate) fn delegate(
    caller: Algorithm,
    fallback: Fallback,
    f: &dyn ObjectiveFunction,
    state: &SolverState,
    guess: f64,
    reason: FallbackReason,
) -> Result<RootFindingReport, RootFindingError> {
    let remaining = state.remaining();
    tracing::debug!(
        algorithm = %caller,
        fallback  = %fallback.algorithm(),
        ?reason,
        remaining,
        guess,
        "delegating to bracketing fallback"
    );

    let report = match fallback {
        Fallback::Brent  => Brent::with_budget(remaining)
            .solve_with_report(f, state.x_accuracy, guess, state.x_min, state.x_max)?,
        Fallback::Ridder => Ridder::with_budget(remaining)
            .solve_with_report(f, state.x_accuracy, guess, state.x_min, state.x_max)?,
    };

    Ok(RootFindingReport {
        root           : report.root,
        evaluations    : state.evaluations + report.evaluations,
        termination    : Termination::FallbackDelegated { reason, fallback: fallback.algorithm() },
        algorithm_name : caller.algorithm_name(),
    })
}
