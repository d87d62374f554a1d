//! Shared configuration for node-based interpolants.
//!
//! [`CommonCfg`] borrows the caller's data until `build()` copies it into an
//! owned interpolant.
//! - `x`             : strictly increasing, finite nodes
//! - `y`             : finite samples, same length as `x`
//! - `x_min_spacing` : smallest allowed gap between adjacent nodes;
//!   [`DEFAULT_X_TOL`] by default
//!
//! [`impl_common_cfg!`] generates `set_x`, `set_y` and `set_x_tol` on every
//! builder holding a `common: CommonCfg<'a>` field.

use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 1e-12;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x             : &'a [f64],
    pub(crate) y             : &'a [f64],
    pub(crate) x_min_spacing : f64,
}

impl<'a> CommonCfg<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            x             : &[],
            y             : &[],
            x_min_spacing : DEFAULT_X_TOL,
        }
    }

    /// Final check before `build()`: both vectors set, equal length, `n >= need`.
    pub fn validate(&self, need: usize) -> Result<(), InterpolationError> {
        let (x_len, y_len) = (self.x.len(), self.y.len());
        if x_len != y_len {
            return Err(InterpolationError::UnequalLength { x_len, y_len });
        }
        if x_len < need {
            return Err(InterpolationError::InsufficientPoints { got: x_len, need });
        }
        Ok(())
    }

    // getters
    pub fn x(&self)             -> &'a [f64] { self.x }
    pub fn y(&self)             -> &'a [f64] { self.y }
    pub fn x_min_spacing(&self) -> f64       { self.x_min_spacing }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a [f64])     { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a [f64])     { self.y = v; }
    pub(crate) fn with_x_min_spacing(&mut self, v: f64) { self.x_min_spacing = v; }
}

impl Default for CommonCfg<'_> {
    fn default() -> Self { Self::new() }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

/// Nodes must be finite, strictly increasing and at least `min_spacing` apart.
pub(crate) fn check_nodes(x: &[f64], min_spacing: f64) -> Result<(), InterpolationError> {
    if let Some(idx) = non_finite_idx(x) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }
    for pair in x.windows(2) {
        if (pair[1] - pair[0]).abs() < min_spacing {
            return Err(InterpolationError::DuplicateX { x1: pair[0], x2: pair[1] });
        }
        if pair[1] <= pair[0] {
            return Err(InterpolationError::NonIncreasingX);
        }
    }
    Ok(())
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                $crate::interpolation::config::check_nodes(v, self.common.x_min_spacing)?;

                // symmetric with set_y
                let y_len = self.common.y.len();
                if y_len != 0 && y_len != v.len() {
                    return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
                }

                self.common.with_x(v);
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                let x_len = self.common.x.len();
                if x_len != 0 && v.len() != x_len {
                    return Err(InterpolationError::UnequalLength { x_len, y_len: v.len() });
                }

                self.common.with_y(v);
                Ok(self)
            }

            /// Must be set before `set_x` to take effect on node validation.
            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v <= 0.0 {
                    return Err(InterpolationError::InvalidParameter {
                        name: "x_tol", reason: "must be finite and > 0", got: v
                    });
                }

                self.common.with_x_min_spacing(v);
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
