//! Defines the [`RootFindingReport`] struct returned by
//! [`crate::root_finding::solver::Solver1D::solve_with_report`].

use super::algorithms::Algorithm;


/// Why a derivative-aware solver handed control to its fallback.
/// - [`FallbackReason::ZeroDerivative`]  : Newton, `|f'(root)| < 1e-15`
/// - [`FallbackReason::ZeroDenominator`] : Halley, `|2f'² - f·f''| < 1e-15`
/// - [`FallbackReason::LeftBracket`]     : the step landed outside `[x_min, x_max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    ZeroDerivative,
    ZeroDenominator,
    LeftBracket,
}


/// Terminal state of a successful solve.
/// - [`Termination::Converged`]         : the algorithm met its own convergence test
/// - [`Termination::FallbackDelegated`] : the root came from the bracketing fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Converged,
    FallbackDelegated { reason: FallbackReason, fallback: Algorithm },
}


/// Final report of a successful solve.
///
/// [`RootFindingReport`]
/// - `root`           : accepted root estimate, always inside the bracket
/// - `evaluations`    : budget units consumed, fallback included
/// - `termination`    : how the solve ended ([`Termination`])
/// - `algorithm_name` : algorithm that was asked to solve (e.g. `"newton"`)
#[derive(Debug, Copy, Clone)]
pub struct RootFindingReport {
    pub root           : f64,
    pub evaluations    : usize,
    pub termination    : Termination,
    pub algorithm_name : &'static str,
}

impl RootFindingReport {
    pub(crate) fn converged(algorithm: Algorithm, root: f64, evaluations: usize) -> Self {
        Self {
            root,
            evaluations,
            termination    : Termination::Converged,
            algorithm_name : algorithm.algorithm_name(),
        }
    }

    /// `true` if the root was produced by the fallback solver.
    pub fn delegated(&self) -> bool {
        matches!(self.termination, Termination::FallbackDelegated { .. })
    }
}
