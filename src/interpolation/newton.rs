//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Coefficients are kept alongside the samples and recomputed whenever the
//! samples are replaced; evaluation uses Horner's scheme.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::samples::Samples;
use crate::interpolation::traits::Interpolation;


/// Newton interpolation configuration
///
/// # Construction
/// - Use [`NewtonCfg::new`] then setters, finish with [`NewtonCfg::build`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NewtonCfg<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }

    /// # Errors
    /// - [`InterpolationError::UnequalLength`]      : `x` and `y` differ in length
    /// - [`InterpolationError::InsufficientPoints`] : fewer than 2 nodes
    pub fn build(self) -> Result<NewtonPolynomial, InterpolationError> {
        self.common.validate(2)?;
        let x       = self.common.x().to_vec();
        let samples = Samples::new(self.common.y())?;
        let coeffs  = divided_differences(&x, samples.as_slice());
        Ok(NewtonPolynomial { x, samples, coeffs })
    }
}
impl_common_cfg!(NewtonCfg<'a>);


/// Interpolating polynomial in Newton form. Build it with [`NewtonCfg`].
#[derive(Debug, Clone)]
pub struct NewtonPolynomial {
    x:       Vec<f64>,
    samples: Samples,
    coeffs:  Vec<f64>,
}

impl NewtonPolynomial {
    pub fn nodes(&self)        -> &[f64] { &self.x }
    pub fn coefficients(&self) -> &[f64] { &self.coeffs }
}


/// Computes Newton divided-difference coefficients in place of `c`.
///
/// On return `P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})`.
#[inline]
fn divided_differences_into(x: &[f64], y: &[f64], c: &mut [f64]) {
    let n = x.len();
    c.copy_from_slice(y);

    for j in 1..n {
        for i in (j..n).rev() {
            c[i] = (c[i] - c[i - 1]) / (x[i] - x[i - j]);
        }
    }
}

fn divided_differences(x: &[f64], y: &[f64]) -> Vec<f64> {
    let mut c = vec![0.0; x.len()];
    divided_differences_into(x, y, &mut c);
    c
}


impl Interpolation for NewtonPolynomial {
    fn algorithm(&self) -> Algorithm { Algorithm::Newton }

    fn samples(&self) -> &Samples { &self.samples }

    fn samples_mut(&mut self) -> &mut Samples { &mut self.samples }

    fn refresh(&mut self) {
        divided_differences_into(&self.x, self.samples.as_slice(), &mut self.coeffs);
    }

    /// Evaluates with Horner's nested form:
    ///
    /// ```text
    /// P(xq) = c[0] + (xq - x[0]) * [ c[1] + (xq - x[1]) * [ ... c[n-1] ... ] ]
    /// ```
    ///
    /// # Errors
    /// - [`InterpolationError::OutOfBounds`] : `xq` outside the node range
    fn value(&self, xq: f64) -> Result<f64, InterpolationError> {
        let n     = self.x.len();
        let x_min = self.x[0];
        let x_max = self.x[n - 1];
        if !(xq >= x_min && xq <= x_max) {
            return Err(InterpolationError::OutOfBounds { got: xq, x_min, x_max });
        }

        let mut p = self.coeffs[n - 1];
        for j in (0..n - 1).rev() {
            p = self.coeffs[j] + (xq - self.x[j]) * p;
        }
        Ok(p)
    }
}
