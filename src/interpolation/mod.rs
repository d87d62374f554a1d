//! Interpolation with replaceable samples.
//!
//! ┌ [`traits`]    : the [`Interpolation`] trait (`value`, `update_y`, `values`)
//! ├ [`samples`]   : owned, fixed-length sample buffer
//! ├ [`chebyshev`] : Chebyshev series on `[-1, 1]`
//! ├ [`linear`]    : piecewise linear on supplied nodes
//! └ [`newton`]    : divided-difference polynomial on supplied nodes

pub mod algorithms;
pub mod config;
pub mod errors;
pub mod samples;
pub mod traits;

pub mod chebyshev;
pub mod linear;
pub mod newton;

pub use algorithms::Algorithm;
pub use errors::InterpolationError;
pub use samples::Samples;
pub use traits::Interpolation;
pub use chebyshev::{Chebyshev, ChebyshevKind};
pub use linear::{Linear, LinearCfg};
pub use newton::{NewtonCfg, NewtonPolynomial};
