//! One-dimensional root finding.
//!
//! ┌ [`objective`]  : capability-tagged objective functions
//! ├ [`solver`]     : the [`Solver1D`] trait and its shared entry validation
//! ├ [`newton`]     : Newton–Raphson, falls back when unsafe
//! ├ [`halley`]     : Halley, falls back when unsafe
//! ├ [`brent`]      : bracketing, value-only (default fallback)
//! └ [`ridder`]     : bracketing, value-only

// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub mod objective;
pub mod state;
pub mod solver;
pub mod fallback;
pub mod config;

// algorithms
pub mod newton;
pub mod halley;
pub mod brent;
pub mod ridder;

pub use errors::RootFindingError;
pub use objective::{Capability, Differentiable, ObjectiveFunction, TwiceDifferentiable, ValueOnly};
pub use solver::Solver1D;
pub use report::{FallbackReason, RootFindingReport, Termination};
pub use fallback::Fallback;
pub use newton::Newton;
pub use halley::Halley;
pub use brent::Brent;
pub use ridder::Ridder;
