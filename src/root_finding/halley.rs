//! Halley's method: third-order convergence from `f`, `f'` and `f''`.

use super::algorithms::{Algorithm, DerivativeFamily, DEGENERACY_THRESHOLD};
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::RootFindingError;
use super::fallback::{delegate, Fallback};
use super::objective::ObjectiveFunction;
use super::report::{FallbackReason, RootFindingReport};
use super::solver::Solver1D;
use super::state::{checked_derivative, SolverState};


/// Halley solver. Requires an objective exposing the second derivative.
///
/// # Construction
/// - Use [`Halley::new`] then optional setters, as for
///   [`crate::root_finding::newton::Newton`].
#[derive(Debug, Copy, Clone, Default)]
pub struct Halley {
    common:   CommonCfg,
    fallback: Fallback,
}
impl Halley {
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
impl_common_cfg!(Halley);


impl Solver1D for Halley {
    fn algorithm(&self) -> Algorithm { Algorithm::Derivative(DerivativeFamily::Halley) }

    fn common(&self) -> &CommonCfg { &self.common }

    /// # Behavior
    /// - Each pass evaluates `f`, `f'`, `f''`: two budget units.
    /// - `|f(root)| < x_accuracy`: converged before stepping.
    /// - `|2f'² - f·f''| < 1e-15`: delegate from the current root.
    /// - Step `dx = 2·f·f' / (2f'² - f·f'')`, candidate `root - dx`.
    /// - Candidate outside `[x_min, x_max]`: delegate from the pre-step root.
    /// - Converged when `|dx| < x_accuracy`.
    fn solve_impl(
        &self,
        f: &dyn ObjectiveFunction,
        state: &mut SolverState
    ) -> Result<RootFindingReport, RootFindingError> {
        let algorithm = self.algorithm();
        let cost      = algorithm.evaluations_per_pass();

        while state.remaining() >= cost {
            let root    = state.root;
            let froot   = state.evaluate(f, root)?;
            let dfroot  = checked_derivative(root, 1, f.derivative(root), algorithm, f)?;
            let d2froot = checked_derivative(root, 2, f.second_derivative(root), algorithm, f)?;
            // f' and f'' share the second unit
            state.evaluations += cost - 1;

            if froot.abs() < state.x_accuracy {
                return Ok(RootFindingReport::converged(algorithm, root, state.evaluations));
            }

            let denominator = 2.0 * dfroot * dfroot - froot * d2froot;
            if denominator.abs() < DEGENERACY_THRESHOLD {
                return delegate(algorithm, self.fallback, f, state, root, FallbackReason::ZeroDenominator);
            }

            let dx        = 2.0 * froot * dfroot / denominator;
            let candidate = root - dx;
            tracing::trace!(%algorithm, root, froot, dx, evaluations = state.evaluations, "pass");

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
