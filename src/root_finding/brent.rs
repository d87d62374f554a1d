//! Brent's method: inverse quadratic interpolation, secant and bisection.
//!
//! The default fallback of the derivative-aware solvers. It only needs
//! function values and never leaves the bracket it was given.

use super::algorithms::{Algorithm, BracketFamily, ZERO_THRESHOLD};
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::RootFindingError;
use super::objective::ObjectiveFunction;
use super::report::RootFindingReport;
use super::solver::Solver1D;
use super::state::SolverState;


/// Brent solver.
///
/// # Fields
/// - `common` : [`CommonCfg`] with the evaluation budget and domain bounds.
///
/// # Construction
/// - Use [`Brent::new`] then optional setters.
#[derive(Debug, Copy, Clone, Default)]
pub struct Brent {
    common: CommonCfg,
}
impl Brent {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }

    /// Fallback construction. Unlike [`Brent::set_max_evaluations`] this
    /// accepts a zero budget, which surfaces as `NonConvergence`.
    pub(crate) fn with_budget(max_evaluations: usize) -> Self {
        let mut common = CommonCfg::new();
        common.with_max_evaluations(max_evaluations);
        Self { common }
    }
}
impl_common_cfg!(Brent);


impl Solver1D for Brent {
    fn algorithm(&self) -> Algorithm { Algorithm::Bracket(BracketFamily::Brent) }

    fn common(&self) -> &CommonCfg { &self.common }

    /// # Behavior
    /// - `root` starts at the clamped guess; the bracket side whose sign
    ///   differs from `f(root)` is kept as the contrapoint.
    /// - Each pass tries inverse quadratic interpolation (secant when only two
    ///   distinct points exist) and falls back to bisection when the
    ///   interpolated step is too large or progress is too slow.
    /// - Converges when half the bracket is within
    ///   `2·ε·|root| + x_accuracy/2`, or `|f(root)| < 1e-15`.
    ///
    /// # Notes
    /// - Convergence is judged on the bracket width, so a sign change across
    ///   a pole or jump is accepted as a root. For `1/x` on `[-1, 2]` the
    ///   result lands next to `0` with `|f|` huge. Check `f(root)` when the
    ///   residual can be discontinuous.
    fn solve_impl(
        &self,
        f: &dyn ObjectiveFunction,
        state: &mut SolverState
    ) -> Result<RootFindingReport, RootFindingError> {
        let algorithm  = self.algorithm();
        let x_accuracy = state.x_accuracy;

        if state.remaining() == 0 {
            return Err(state.exhausted(algorithm));
        }
        let mut froot = state.evaluate(f, state.root)?;

        // orient: f(x_max) and f(root) must have opposite signs
        if froot * state.fx_min < 0.0 {
            state.x_max  = state.x_min;
            state.fx_max = state.fx_min;
        } else {
            state.x_min  = state.x_max;
            state.fx_min = state.fx_max;
        }

        let mut d = state.root - state.x_max;
        let mut e = d;

        loop {
            if (froot > 0.0 && state.fx_max > 0.0) || (froot < 0.0 && state.fx_max < 0.0) {
                // root must stay between x_max and root
                state.x_max  = state.x_min;
                state.fx_max = state.fx_min;
                d = state.root - state.x_min;
                e = d;
            }
            if state.fx_max.abs() < froot.abs() {
                // keep root as the best estimate
                state.x_min  = state.root;
                state.root   = state.x_max;
                state.x_max  = state.x_min;
                state.fx_min = froot;
                froot        = state.fx_max;
                state.fx_max = state.fx_min;
            }

            let x_acc1 = 2.0 * f64::EPSILON * state.root.abs() + 0.5 * x_accuracy;
            let x_mid  = (state.x_max - state.root) / 2.0;
            if x_mid.abs() <= x_acc1 || froot.abs() < ZERO_THRESHOLD {
                tracing::trace!(%algorithm, root = state.root, evaluations = state.evaluations, "converged");
                return Ok(RootFindingReport::converged(algorithm, state.root, state.evaluations));
            }

            if state.remaining() == 0 {
                return Err(state.exhausted(algorithm));
            }

            if e.abs() >= x_acc1 && state.fx_min.abs() > froot.abs() {
                let s = froot / state.fx_min;
                let (mut p, mut q);
                if state.x_min == state.x_max {
                    // secant
                    p = 2.0 * x_mid * s;
                    q = 1.0 - s;
                } else {
                    // inverse quadratic interpolation
                    let q0 = state.fx_min / state.fx_max;
                    let r  = froot / state.fx_max;
                    p = s * (2.0 * x_mid * q0 * (q0 - r) - (state.root - state.x_min) * (r - 1.0));
                    q = (q0 - 1.0) * (r - 1.0) * (s - 1.0);
                }
                if p > 0.0 { q = -q; }
                p = p.abs();

                let min1 = 3.0 * x_mid * q - (x_acc1 * q).abs();
                let min2 = (e * q).abs();
                if 2.0 * p < min1.min(min2) {
                    // accept interpolation
                    e = d;
                    d = p / q;
                } else {
                    d = x_mid;
                    e = d;
                }
            } else {
                // bounds decreasing too slowly
                d = x_mid;
                e = d;
            }

            state.x_min  = state.root;
            state.fx_min = froot;
            if d.abs() > x_acc1 {
                state.root += d;
            } else {
                state.root += x_acc1.copysign(x_mid);
            }
            froot = state.evaluate(f, state.root)?;
        }
    }
}
