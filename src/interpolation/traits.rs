use super::algorithms::Algorithm;
use super::errors::InterpolationError;
use super::samples::Samples;


/// Interpolant over fixed nodes whose sampled values can be replaced.
///
/// Implementors own a [`Samples`] buffer and any coefficients derived from
/// it. [`Interpolation::update_y`] swaps the samples in place and then calls
/// [`Interpolation::refresh`] so the derived data follows.
pub trait Interpolation {
    fn algorithm(&self) -> Algorithm;

    fn samples(&self) -> &Samples;

    fn samples_mut(&mut self) -> &mut Samples;

    /// Recomputes derived coefficients from the current samples.
    fn refresh(&mut self);

    /// Evaluates the interpolant at `x`.
    fn value(&self, x: f64) -> Result<f64, InterpolationError>;

    /// Replaces the sampled values.
    ///
    /// # Errors
    /// - [`InterpolationError::LengthMismatch`] : wrong length
    /// - [`InterpolationError::NonFiniteVec`]   : NaN / inf sample
    ///
    /// Nothing changes on error.
    fn update_y(&mut self, new_y: &[f64]) -> Result<(), InterpolationError> {
        self.samples_mut().replace(new_y)?;
        self.refresh();
        Ok(())
    }

    /// Copy of the current samples.
    fn values(&self) -> Vec<f64> { self.samples().to_vec() }

    fn len(&self) -> usize { self.samples().len() }

    fn is_empty(&self) -> bool { self.samples().is_empty() }

    /// evaluates many points
    #[inline]
    fn value_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.value(xq)).collect()
    }
}
