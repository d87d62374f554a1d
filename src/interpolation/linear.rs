//! Linear Interpolation
//!
//! Implements piecewise-[linear interpolation](https://en.wikipedia.org/wiki/Linear_interpolation).
//!
//! Each consecutive pair `(x[i], y[i])`, `(x[i+1], y[i+1])` defines
//! a line segment. Evaluation points lying within `[x[i], x[i+1]]`
//! are interpolated linearly between the two end points.

use std::cmp::Ordering;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::samples::Samples;
use crate::interpolation::traits::Interpolation;


/// Linear interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`LinearCfg::new`] then setters, finish with [`LinearCfg::build`].
///
/// # Defaults
/// - Minimum allowed spacing between consecutive nodes;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LinearCfg<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }

    /// Copies the configured data into an owned [`Linear`].
    ///
    /// # Errors
    /// - [`InterpolationError::UnequalLength`]      : `x` and `y` differ in length
    /// - [`InterpolationError::InsufficientPoints`] : fewer than 2 nodes
    pub fn build(self) -> Result<Linear, InterpolationError> {
        self.common.validate(2)?;
        Ok(Linear {
            x:       self.common.x().to_vec(),
            samples: Samples::new(self.common.y())?,
        })
    }
}
impl_common_cfg!(LinearCfg<'a>);


/// Piecewise-linear interpolant. Build it with [`LinearCfg`].
#[derive(Debug, Clone)]
pub struct Linear {
    x:       Vec<f64>,
    samples: Samples,
}

impl Linear {
    pub fn nodes(&self) -> &[f64] { &self.x }
}


#[inline]
fn lerp(x0: f64, x1: f64, y0: f64, y1: f64, xq: f64) -> f64 {
    y0 + (y1 - y0) * (xq - x0) / (x1 - x0)
}


impl Interpolation for Linear {
    fn algorithm(&self) -> Algorithm { Algorithm::Linear }

    fn samples(&self) -> &Samples { &self.samples }

    fn samples_mut(&mut self) -> &mut Samples { &mut self.samples }

    // nothing derived
    fn refresh(&mut self) {}

    /// # Behavior
    /// - If `xq` lies outside `[x[0], x[-1]]`, returns
    ///   [`InterpolationError::OutOfBounds`].
    /// - Otherwise finds the enclosing interval `[x[i], x[i+1]]` by binary
    ///   search and computes
    ///
    /// ```text
    /// yq = y[i] + (y[i+1] - y[i]) * (xq - x[i]) / (x[i+1] - x[i])
    /// ```
    fn value(&self, xq: f64) -> Result<f64, InterpolationError> {
        let x = &self.x;
        let y = self.samples.as_slice();

        let x_min = x[0];
        let x_max = x[x.len() - 1];
        // also rejects NaN
        if !(xq >= x_min && xq <= x_max) {
            return Err(InterpolationError::OutOfBounds { got: xq, x_min, x_max });
        }

        match x.binary_search_by(
            |xi| {
                if *xi < xq      { Ordering::Less    }
                else if *xi > xq { Ordering::Greater }
                else             { Ordering::Equal   }
            }
        ) {
            Ok(idx)  => Ok(y[idx]),
            Err(idx) => {
                // x[idx - 1] < xq < x[idx]
                let i = idx - 1;
                Ok(lerp(x[i], x[i + 1], y[i], y[i + 1], xq))
            }
        }
    }
}
