//! Tanh-sinh (double exponential) quadrature.
//!
//! Uses the substitution `x = tanh(π/2 · sinh(t))`, which makes the
//! transformed integrand decay double-exponentially at both ends. Handles
//! integrable endpoint singularities without special treatment.
//!
//! Each level halves the step `h` and only evaluates the new abscissae, so
//! earlier work is reused. Refinement stops when two successive levels agree
//! to `absolute_accuracy`, or at `max_levels`.

use std::cell::Cell;
use std::f64::consts::FRAC_PI_2;

use super::algorithms::{Algorithm, DEFAULT_ABSOLUTE_ACCURACY};
use super::config::impl_common_cfg;
use super::errors::IntegrationError;
use super::state::IntegratorState;
use super::traits::Integrator;


/// Refinement-depth cap used when none is configured.
pub const DEFAULT_MAX_LEVELS: usize = 15;

/// Abscissae are generated for `|t| <= T_MAX`; beyond it every weight is
/// below `1e-35`.
const T_MAX: f64 = 4.0;


/// Tanh-sinh integrator.
///
/// # Fields
/// - `state`      : [`IntegratorState`]; `max_evaluations` is advisory (see below)
/// - `max_levels` : refinement-depth cap, the hard ceiling on cost
///
/// # Construction
/// - Use [`TanhSinh::new`] then optional setters.
///
/// # Defaults
/// - `absolute_accuracy` : [`DEFAULT_ABSOLUTE_ACCURACY`]
/// - `max_levels`        : [`DEFAULT_MAX_LEVELS`]
/// - `max_evaluations`   : `usize::MAX`
///
/// # Notes
/// - `max_evaluations` is *not* enforced: exceeding it only emits a
///   `tracing::warn!`. Bound worst-case cost with `max_levels`.
/// - `absolute_error` after a call is the *requested* accuracy, not an
///   a-posteriori estimate.
#[derive(Debug, Copy, Clone)]
pub struct TanhSinh {
    state:      IntegratorState,
    max_levels: usize,
}

impl TanhSinh {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state:      IntegratorState::new(DEFAULT_ABSOLUTE_ACCURACY, usize::MAX),
            max_levels: DEFAULT_MAX_LEVELS,
        }
    }

    pub fn set_max_levels(mut self, v: usize) -> Result<Self, IntegrationError> {
        if v == 0 {
            return Err(IntegrationError::InvalidParameter {
                name: "max_levels", reason: "must be >= 1", got: 0.0
            });
        }
        self.max_levels = v;
        Ok(self)
    }

    pub fn max_levels(&self) -> usize { self.max_levels }
}
impl_common_cfg!(TanhSinh);

impl Default for TanhSinh {
    fn default() -> Self { Self::new() }
}


/// Abscissa complement and weight at `t >= 0`.
///
/// Returns `(1 - x, w)` with `x = tanh(u)`, `u = π/2 · sinh(t)` and
/// `w = π/2 · cosh(t) / cosh²(u)`. The complement is formed directly so
/// points next to the endpoints keep full relative precision.
#[inline]
fn abscissa_weight(t: f64) -> (f64, f64) {
    let u      = FRAC_PI_2 * t.sinh();
    let e      = (-u).exp();
    let cosh_u = 0.5 * (u.exp() + e);
    let compl  = e / cosh_u;
    let w      = FRAC_PI_2 * t.cosh() / (cosh_u * cosh_u);
    (compl, w)
}


impl Integrator for TanhSinh {
    fn algorithm(&self) -> Algorithm { Algorithm::TanhSinh }

    fn state(&self) -> &IntegratorState { &self.state }

    fn state_mut(&mut self) -> &mut IntegratorState { &mut self.state }

    /// # Behavior
    /// - Level 0 uses step `h = 1` over `t ∈ [-T_MAX, T_MAX]`; level `k`
    ///   adds the odd multiples of `2^-k`.
    /// - Converged when `|I_k - I_{k-1}| <= absolute_accuracy`, `k >= 1`.
    /// - At `max_levels` the last estimate is returned with a warning.
    /// - Every integrand call goes through a counter.
    ///
    /// # Errors
    /// - [`IntegrationError::NonFiniteEvaluation`] : NaN / inf from `f`
    fn integrate_impl(
        &mut self,
        f: &dyn Fn(f64) -> f64,
        a: f64,
        b: f64,
    ) -> Result<f64, IntegrationError> {
        let algorithm  = self.algorithm();
        let accuracy   = self.state.absolute_accuracy();
        let half_width = 0.5 * (b - a);
        let mid        = 0.5 * (a + b);

        let calls   = Cell::new(0usize);
        let counted = |x: f64| -> Result<f64, IntegrationError> {
            calls.set(calls.get() + 1);
            let fx = f(x);
            if !fx.is_finite() {
                return Err(IntegrationError::NonFiniteEvaluation { x, fx });
            }
            Ok(fx)
        };

        // w·(f(left) + f(right)) at ±t; a side that rounds onto its endpoint
        // is skipped, and None once both have
        let pair = |t: f64| -> Result<Option<f64>, IntegrationError> {
            let (compl, w) = abscissa_weight(t);
            let offset     = half_width * compl;
            if offset == 0.0 || w == 0.0 {
                return Ok(None);
            }
            let left  = a + offset;
            let right = b - offset;
            if left <= a && right >= b {
                return Ok(None);
            }
            let mut sum = 0.0;
            if left > a  { sum += counted(left)?; }
            if right < b { sum += counted(right)?; }
            Ok(Some(w * sum))
        };

        // level 0
        let mut h   = 1.0;
        let mut sum = FRAC_PI_2 * counted(mid)?;
        let mut k   = 1;
        loop {
            let t = k as f64 * h;
            if t > T_MAX { break; }
            match pair(t)? {
                Some(s) => sum += s,
                None    => break,
            }
            k += 1;
        }
        let mut estimate = h * half_width * sum;
        let mut converged = false;

        for level in 1..=self.max_levels {
            h *= 0.5;
            let mut level_sum = 0.0;
            let mut k = 1;
            loop {
                let t = k as f64 * h;
                if t > T_MAX { break; }
                match pair(t)? {
                    Some(s) => level_sum += s,
                    None    => break,
                }
                k += 2;
            }

            let previous = estimate;
            estimate = 0.5 * previous + h * half_width * level_sum;
            tracing::trace!(%algorithm, level, estimate, delta = (estimate - previous).abs(), "refined");

            if (estimate - previous).abs() <= accuracy {
                converged = true;
                break;
            }
        }

        let evaluations = calls.get();
        if !converged {
            tracing::warn!(
                %algorithm,
                max_levels = self.max_levels,
                evaluations,
                "refinement cap reached before the accuracy target"
            );
        }
        if evaluations > self.state.max_evaluations() {
            tracing::warn!(
                %algorithm,
                evaluations,
                max_evaluations = self.state.max_evaluations(),
                "advisory evaluation budget exceeded"
            );
        }

        self.state.with_number_of_evaluations(evaluations);
        self.state.with_absolute_error(accuracy);

        Ok(estimate)
    }
}
