//! Numerical kernel for fixed-point exercise-boundary iterations.
//!
//! ┌ [`root_finding`]  : Newton / Halley with bracketing fallback (Brent, Ridder)
//! ├ [`integration`]   : Gauss–Legendre, tanh-sinh and Simpson behind [`integration::Integrator`]
//! └ [`interpolation`] : interpolants whose samples are replaced in place
//!
//! The three families share no state. An engine owns one instance of each and
//! drives them from its own convergence loop.

pub mod root_finding;
pub mod integration;
pub mod interpolation;
