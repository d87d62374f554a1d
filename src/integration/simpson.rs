//! Adaptive Simpson quadrature by trapezoid refinement.
//!
//! Each refinement doubles the number of trapezoid panels, reusing every
//! previous evaluation, and applies one Richardson step
//! `S = (4·T_{2n} - T_n) / 3`. Unlike tanh-sinh, the evaluation budget is a
//! hard limit.

use super::algorithms::{Algorithm, DEFAULT_ABSOLUTE_ACCURACY};
use super::config::impl_common_cfg;
use super::errors::IntegrationError;
use super::state::IntegratorState;
use super::traits::Integrator;


/// Evaluation budget used when none is configured.
pub const DEFAULT_MAX_EVALUATIONS: usize = 1 << 20;

/// Refinements always performed before the convergence test is trusted.
pub const MIN_REFINEMENTS: usize = 5;


/// Adaptive Simpson integrator.
///
/// # Construction
/// - Use [`Simpson::new`] then optional setters (`set_absolute_accuracy`,
///   `set_max_evaluations`).
///
/// # Defaults
/// - `absolute_accuracy` : [`DEFAULT_ABSOLUTE_ACCURACY`]
/// - `max_evaluations`   : [`DEFAULT_MAX_EVALUATIONS`]
///
/// # Notes
/// - `absolute_error` after a successful call is the last `|ΔS|`.
#[derive(Debug, Copy, Clone)]
pub struct Simpson {
    state: IntegratorState,
}

impl Simpson {
    #[must_use]
    pub fn new() -> Self {
        Self { state: IntegratorState::new(DEFAULT_ABSOLUTE_ACCURACY, DEFAULT_MAX_EVALUATIONS) }
    }
}
impl_common_cfg!(Simpson);

impl Default for Simpson {
    fn default() -> Self { Self::new() }
}


impl Integrator for Simpson {
    fn algorithm(&self) -> Algorithm { Algorithm::Simpson }

    fn state(&self) -> &IntegratorState { &self.state }

    fn state_mut(&mut self) -> &mut IntegratorState { &mut self.state }

    /// # Behavior
    /// - Starts from the single trapezoid (2 evaluations).
    /// - Refinement `i` adds the `n` panel midpoints, `n = 2^(i-1)`.
    /// - Converged when `|S_i - S_{i-1}| <= absolute_accuracy` and
    ///   `i > MIN_REFINEMENTS`.
    ///
    /// # Errors
    /// - [`IntegrationError::MaxEvaluationsExceeded`] : the next refinement
    ///   would exceed `max_evaluations`
    /// - [`IntegrationError::NonFiniteEvaluation`]    : NaN / inf from `f`
    fn integrate_impl(
        &mut self,
        f: &dyn Fn(f64) -> f64,
        a: f64,
        b: f64,
    ) -> Result<f64, IntegrationError> {
        let algorithm       = self.algorithm();
        let accuracy        = self.state.absolute_accuracy();
        let max_evaluations = self.state.max_evaluations();

        let eval = |x: f64| -> Result<f64, IntegrationError> {
            let fx = f(x);
            if !fx.is_finite() {
                return Err(IntegrationError::NonFiniteEvaluation { x, fx });
            }
            Ok(fx)
        };

        if max_evaluations < 2 {
            return Err(IntegrationError::MaxEvaluationsExceeded {
                algorithm, max_evaluations, last_estimate: 0.0
            });
        }

        let width           = b - a;
        let mut trapezoid   = 0.5 * width * (eval(a)? + eval(b)?);
        let mut simpson     = trapezoid;
        let mut evaluations = 2usize;
        let mut panels      = 1usize;
        let mut refinement  = 1usize;

        loop {
            if evaluations.saturating_add(panels) > max_evaluations {
                self.state.with_number_of_evaluations(evaluations);
                return Err(IntegrationError::MaxEvaluationsExceeded {
                    algorithm, max_evaluations, last_estimate: simpson
                });
            }

            let dx      = width / panels as f64;
            let mut sum = 0.0;
            for i in 0..panels {
                sum += eval(a + (i as f64 + 0.5) * dx)?;
            }
            evaluations += panels;
            panels      *= 2;

            let refined = 0.5 * (trapezoid + dx * sum);
            let next    = (4.0 * refined - trapezoid) / 3.0;
            let delta   = (next - simpson).abs();
            tracing::trace!(%algorithm, refinement, estimate = next, delta, evaluations, "refined");

            trapezoid = refined;
            simpson   = next;

            if delta <= accuracy && refinement > MIN_REFINEMENTS {
                self.state.with_number_of_evaluations(evaluations);
                self.state.with_absolute_error(delta);
                return Ok(simpson);
            }
            refinement += 1;
        }
    }
}
