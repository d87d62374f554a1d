//! Newton–Raphson method with a bracketing safety net.

use super::algorithms::{Algorithm, DerivativeFamily, DEGENERACY_THRESHOLD};
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::RootFindingError;
use super::fallback::{delegate, Fallback};
use super::objective::ObjectiveFunction;
use super::report::{FallbackReason, RootFindingReport};
use super::solver::Solver1D;
use super::state::{checked_derivative, SolverState};


/// Newton solver.
///
/// # Fields
/// - `common`   : [`CommonCfg`] with the evaluation budget and domain bounds.
/// - `fallback` : bracketing solver used when a step is unsafe (default [`Fallback::Brent`]).
///
/// # Construction
/// - Use [`Newton::new`] then optional setters.
#[derive(Debug, Copy, Clone, Default)]
pub struct Newton {
    common:   CommonCfg,
    fallback: Fallback,
}
impl Newton {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common:   CommonCfg::new(),
            fallback: Fallback::Brent,
        }
    }

    #[must_use]
    pub fn set_fallback(mut self, v: Fallback) -> Self {
        self.fallback = v;
        self
    }

    pub fn fallback(&self) -> Fallback { self.fallback }
}
impl_common_cfg!(Newton);


impl Solver1D for Newton {
    fn algorithm(&self) -> Algorithm { Algorithm::Derivative(DerivativeFamily::Newton) }

    fn common(&self) -> &CommonCfg { &self.common }

    /// Finds a root using the
    /// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
    ///
    /// # Behavior
    /// - Each pass evaluates `f(root)` and `f'(root)` together: one budget unit.
    /// - `|f'(root)| < 1e-15`: delegate from the current root.
    /// - Step `dx = f/f'`, candidate `root - dx`.
    /// - Candidate outside `[x_min, x_max]`: delegate from the pre-step root.
    /// - Converged when `|dx| < x_accuracy`.
    ///
    /// # Notes
    /// - Quadratic convergence near a simple root with a good guess.
    /// - Delegation is terminal; the fallback's result or error is returned as-is.
    fn solve_impl(
        &self,
        f: &dyn ObjectiveFunction,
        state: &mut SolverState
    ) -> Result<RootFindingReport, RootFindingError> {
        let algorithm = self.algorithm();
        let cost      = algorithm.evaluations_per_pass();

        while state.remaining() >= cost {
            let root   = state.root;
            let froot  = state.evaluate(f, root)?;
            let dfroot = checked_derivative(root, 1, f.derivative(root), algorithm, f)?;

            if dfroot.abs() < DEGENERACY_THRESHOLD {
                return delegate(algorithm, self.fallback, f, state, root, FallbackReason::ZeroDerivative);
            }

            let dx        = froot / dfroot;
            let candidate = root - dx;
            tracing::trace!(%algorithm, root, froot, dfroot, dx, evaluations = state.evaluations, "pass");

            if !state.in_bracket(candidate) {
                return delegate(algorithm, self.fallback, f, state, root, FallbackReason::LeftBracket);
            }
            state.root = candidate;

            if dx.abs() < state.x_accuracy {
                return Ok(RootFindingReport::converged(algorithm, state.root, state.evaluations));
            }
        }

        Err(state.exhausted(algorithm))
    }
}
