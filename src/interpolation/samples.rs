//! Owned sample buffer behind every interpolant.
//!
//! The length is fixed at construction. [`Samples::replace`] overwrites the
//! values in place and never reallocates; a rejected replacement leaves the
//! buffer untouched.

use super::config::non_finite_idx;
use super::errors::InterpolationError;


#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    y: Vec<f64>,
}

impl Samples {
    /// Copies `y` into a new buffer.
    ///
    /// # Errors
    /// - [`InterpolationError::NonFiniteVec`] : NaN / inf in `y`
    pub fn new(y: &[f64]) -> Result<Self, InterpolationError> {
        if let Some(idx) = non_finite_idx(y) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        Ok(Self { y: y.to_vec() })
    }

    /// Overwrites every sample with `new_y`.
    ///
    /// # Errors
    /// - [`InterpolationError::LengthMismatch`] : `new_y.len() != self.len()`
    /// - [`InterpolationError::NonFiniteVec`]   : NaN / inf in `new_y`
    pub fn replace(&mut self, new_y: &[f64]) -> Result<(), InterpolationError> {
        if new_y.len() != self.y.len() {
            return Err(InterpolationError::LengthMismatch {
                expected: self.y.len(),
                got:      new_y.len(),
            });
        }
        if let Some(idx) = non_finite_idx(new_y) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        self.y.copy_from_slice(new_y);
        Ok(())
    }

    pub fn as_slice(&self) -> &[f64] { &self.y }

    pub fn to_vec(&self) -> Vec<f64> { self.y.clone() }

    pub fn len(&self) -> usize { self.y.len() }

    pub fn is_empty(&self) -> bool { self.y.is_empty() }
}
