//! Chebyshev Interpolation
//!
//! Polynomial interpolation on `[-1, 1]` at Chebyshev nodes, stored as a
//! Chebyshev series `p(x) = Σ c_m T_m(x)`.
//!
//! [`ChebyshevKind`]
//! ├ `FirstKind`  : roots of `T_n`, interior points only
//! └ `SecondKind` : extrema of `T_{n-1}`, endpoints included (default)
//!
//! Nodes are stored in ascending order and `y[i]` is the sample at
//! `nodes()[i]`. Coefficients come from a discrete cosine transform of the
//! samples and are recomputed on every `update_y`; evaluation uses the
//! Clenshaw recurrence.

use std::f64::consts::PI;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::samples::Samples;
use crate::interpolation::traits::Interpolation;


/// Queries within this distance of `[-1, 1]` are clamped onto it.
pub const DOMAIN_TOL: f64 = 1e-12;


#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ChebyshevKind {
    FirstKind,
    #[default]
    SecondKind,
}


/// Chebyshev interpolant.
///
/// # Construction
/// - [`Chebyshev::new`] from samples already taken at [`Chebyshev::nodes_for`].
/// - [`Chebyshev::from_fn`] samples a function at the nodes.
#[derive(Debug, Clone)]
pub struct Chebyshev {
    kind:    ChebyshevKind,
    nodes:   Vec<f64>,
    samples: Samples,
    coeffs:  Vec<f64>,
}

impl Chebyshev {
    /// # Errors
    /// - [`InterpolationError::InsufficientPoints`] : `y.len() < 2`
    /// - [`InterpolationError::NonFiniteVec`]       : NaN / inf sample
    pub fn new(y: &[f64], kind: ChebyshevKind) -> Result<Self, InterpolationError> {
        if y.len() < 2 {
            return Err(InterpolationError::InsufficientPoints { got: y.len(), need: 2 });
        }
        let samples    = Samples::new(y)?;
        let mut coeffs = vec![0.0; y.len()];
        chebyshev_coefficients(kind, samples.as_slice(), &mut coeffs);

        Ok(Self {
            kind,
            nodes: Self::nodes_for(y.len(), kind),
            samples,
            coeffs,
        })
    }

    /// Interpolates `f` at `n` nodes of the given kind.
    ///
    /// # Errors
    /// As [`Chebyshev::new`]; a non-finite `f(x_i)` reports index `i`.
    pub fn from_fn<F>(n: usize, f: F, kind: ChebyshevKind) -> Result<Self, InterpolationError>
    where
        F: Fn(f64) -> f64,
    {
        let y: Vec<f64> = Self::nodes_for(n, kind).into_iter().map(f).collect();
        Self::new(&y, kind)
    }

    /// Ascending Chebyshev nodes of the given kind. Empty for `n == 0`.
    pub fn nodes_for(n: usize, kind: ChebyshevKind) -> Vec<f64> {
        let nf = n as f64;
        match kind {
            ChebyshevKind::FirstKind => (0..n)
                .map(|j| -(PI * (j as f64 + 0.5) / nf).cos())
                .collect(),
            ChebyshevKind::SecondKind if n == 1 => vec![0.0],
            ChebyshevKind::SecondKind => {
                let last = nf - 1.0;
                (0..n).map(|j| -(PI * j as f64 / last).cos()).collect()
            }
        }
    }

    /// Copy of the nodes.
    pub fn nodes(&self) -> Vec<f64> { self.nodes.clone() }

    pub fn kind(&self) -> ChebyshevKind { self.kind }

    /// Series coefficients `c_m` of `p(x) = Σ c_m T_m(x)`.
    pub fn coefficients(&self) -> &[f64] { &self.coeffs }
}


/// Fills `c` with the Chebyshev series coefficients of the samples `y`,
/// given in ascending-node order.
///
/// First kind (`t_k = cos(π(k+½)/n)`):
/// `c_m = (2/n) Σ_k f(t_k) cos(π m (k+½)/n)`, `c_0` halved.
///
/// Second kind (`t_k = cos(πk/N)`, `N = n-1`):
/// `c_m = (2/N) Σ''_k f(t_k) cos(π m k/N)`, the double prime halving the
/// `k = 0, N` terms; `c_0` and `c_N` halved.
///
/// Ascending node `j` is `t_{n-1-j}`, so `f(t_k) = y[n-1-k]`.
fn chebyshev_coefficients(kind: ChebyshevKind, y: &[f64], c: &mut [f64]) {
    let n  = y.len();
    let at = |k: usize| y[n - 1 - k];

    match kind {
        ChebyshevKind::FirstKind => {
            let nf = n as f64;
            for (m, cm) in c.iter_mut().enumerate() {
                let mut sum = 0.0;
                for k in 0..n {
                    sum += at(k) * (PI * m as f64 * (k as f64 + 0.5) / nf).cos();
                }
                *cm = 2.0 * sum / nf;
            }
            c[0] *= 0.5;
        }
        ChebyshevKind::SecondKind => {
            let big_n = n - 1;
            let nf    = big_n as f64;
            for (m, cm) in c.iter_mut().enumerate() {
                let mut sum = 0.0;
                for k in 0..n {
                    let term = at(k) * (PI * (m * k) as f64 / nf).cos();
                    sum += if k == 0 || k == big_n { 0.5 * term } else { term };
                }
                *cm = 2.0 * sum / nf;
            }
            c[0]     *= 0.5;
            c[big_n] *= 0.5;
        }
    }
}

/// `Σ c_m T_m(x)` by the Clenshaw recurrence.
#[inline]
fn clenshaw(c: &[f64], x: f64) -> f64 {
    let mut b1 = 0.0;
    let mut b2 = 0.0;
    for &ck in c.iter().skip(1).rev() {
        let b0 = 2.0 * x * b1 - b2 + ck;
        b2 = b1;
        b1 = b0;
    }
    x * b1 - b2 + c[0]
}


impl Interpolation for Chebyshev {
    fn algorithm(&self) -> Algorithm { Algorithm::Chebyshev }

    fn samples(&self) -> &Samples { &self.samples }

    fn samples_mut(&mut self) -> &mut Samples { &mut self.samples }

    fn refresh(&mut self) {
        chebyshev_coefficients(self.kind, self.samples.as_slice(), &mut self.coeffs);
    }

    /// # Errors
    /// - [`InterpolationError::OutOfBounds`] : `x` further than [`DOMAIN_TOL`]
    ///   outside `[-1, 1]`, or NaN
    fn value(&self, x: f64) -> Result<f64, InterpolationError> {
        if !(x.abs() <= 1.0 + DOMAIN_TOL) {
            return Err(InterpolationError::OutOfBounds { got: x, x_min: -1.0, x_max: 1.0 });
        }
        Ok(clenshaw(&self.coeffs, x.clamp(-1.0, 1.0)))
    }
}
