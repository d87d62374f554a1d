//! Ridder's method.
//!
//! Evaluates the bracket midpoint, then fits an exponential through the
//! three points to place the next estimate. Two evaluations per pass;
//! the bracket shrinks at least as fast as bisection.

use super::algorithms::{Algorithm, BracketFamily};
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::RootFindingError;
use super::objective::ObjectiveFunction;
use super::report::RootFindingReport;
use super::solver::Solver1D;
use super::state::SolverState;


/// Ridder solver. Ignores the guess; works from the bracket alone.
#[derive(Debug, Copy, Clone, Default)]
pub struct Ridder {
    common: CommonCfg,
}
impl Ridder {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }

    pub(crate) fn with_budget(max_evaluations: usize) -> Self {
        let mut common = CommonCfg::new();
        common.with_max_evaluations(max_evaluations);
        Self { common }
    }
}
impl_common_cfg!(Ridder);


impl Solver1D for Ridder {
    fn algorithm(&self) -> Algorithm { Algorithm::Bracket(BracketFamily::Ridder) }

    fn common(&self) -> &CommonCfg { &self.common }

    /// # Behavior
    /// - Converges on `|f(x)| < x_accuracy` at either trial point, or on a
    ///   bracket narrower than `x_accuracy` (returns its midpoint).
    /// - A correction that would leave the bracket is replaced by the midpoint.
    fn solve_impl(
        &self,
        f: &dyn ObjectiveFunction,
        state: &mut SolverState
    ) -> Result<RootFindingReport, RootFindingError> {
        let algorithm  = self.algorithm();
        let x_accuracy = state.x_accuracy;

        let (mut lo, mut hi)   = (state.x_min, state.x_max);
        let (mut flo, mut fhi) = (state.fx_min, state.fx_max);

        while state.remaining() >= 2 {
            let x_mid  = 0.5 * (lo + hi);
            let fx_mid = state.evaluate(f, x_mid)?;
            state.root = x_mid;
            if fx_mid.abs() < x_accuracy {
                return Ok(RootFindingReport::converged(algorithm, x_mid, state.evaluations));
            }

            let s = (fx_mid * fx_mid - flo * fhi).sqrt();
            if s == 0.0 {
                return Ok(RootFindingReport::converged(algorithm, x_mid, state.evaluations));
            }

            let mut dx = (x_mid - lo) * fx_mid / s;
            if flo - fhi < 0.0 { dx = -dx; }

            let mut x_new = x_mid + dx;
            if x_new < lo.min(hi) || x_new > lo.max(hi) {
                x_new = x_mid;
            }

            let fx_new = state.evaluate(f, x_new)?;
            state.root = x_new;
            if fx_new.abs() < x_accuracy {
                return Ok(RootFindingReport::converged(algorithm, x_new, state.evaluations));
            }

            if fx_mid * fx_new < 0.0 {
                lo  = x_mid;
                flo = fx_mid;
                hi  = x_new;
                fhi = fx_new;
            } else if flo * fx_new < 0.0 {
                hi  = x_new;
                fhi = fx_new;
            } else {
                lo  = x_new;
                flo = fx_new;
            }

            if (hi - lo).abs() < x_accuracy {
                let root = 0.5 * (lo + hi);
                return Ok(RootFindingReport::converged(algorithm, root, state.evaluations));
            }
        }

        Err(state.exhausted(algorithm))
    }
}
