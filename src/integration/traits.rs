use super::algorithms::Algorithm;
use super::errors::IntegrationError;
use super::state::IntegratorState;


/// One-dimensional definite integration.
///
/// Implementors supply [`Integrator::integrate_impl`] for `a <= b`; the
/// provided [`Integrator::integrate`] resets the per-call outputs and handles
/// orientation:
/// - `a == b` runs the rule on a zero-width interval, which yields `0` and
///   still records the rule's own evaluation count
/// - `b < a` returns `-∫[b, a]`
pub trait Integrator {
    fn algorithm(&self) -> Algorithm;

    fn state(&self) -> &IntegratorState;

    fn state_mut(&mut self) -> &mut IntegratorState;

    /// Integrates `f` over `[a, b]` with `a <= b`, both finite.
    fn integrate_impl(
        &mut self,
        f: &dyn Fn(f64) -> f64,
        a: f64,
        b: f64,
    ) -> Result<f64, IntegrationError>;

    /// Integrates `f` over `[a, b]`.
    ///
    /// # Errors
    /// - [`IntegrationError::InvalidInterval`] : non-finite limit
    /// - algorithm-specific failures from [`Integrator::integrate_impl`]
    fn integrate(
        &mut self,
        f: &dyn Fn(f64) -> f64,
        a: f64,
        b: f64,
    ) -> Result<f64, IntegrationError> {
        self.state_mut().reset();

        if !a.is_finite() || !b.is_finite() {
            return Err(IntegrationError::InvalidInterval { a, b });
        }
        if a <= b {
            self.integrate_impl(f, a, b)
        } else {
            Ok(-self.integrate_impl(f, b, a)?)
        }
    }

    fn absolute_accuracy(&self) -> f64 { self.state().absolute_accuracy() }

    fn max_evaluations(&self) -> usize { self.state().max_evaluations() }

    /// Error reported by the last call. See each algorithm for what it means.
    fn absolute_error(&self) -> f64 { self.state().absolute_error() }

    fn number_of_evaluations(&self) -> usize { self.state().number_of_evaluations() }
}
