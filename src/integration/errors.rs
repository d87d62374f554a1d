//! Integration error types.
//!
//! [`IntegrationError`]
//! ├ invalid construction parameter (order, accuracy, levels, budget)
//! ├ non-finite integration limits
//! ├ hard evaluation budget exceeded (budget-enforcing algorithms only)
//! └ non-finite integrand value

use thiserror::Error;
use super::algorithms::Algorithm;


#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("invalid `{name}`: {reason}. got {got}")]
    InvalidParameter { name: &'static str, reason: &'static str, got: f64 },

    #[error("invalid interval: limits must be finite. got [{a}, {b}]")]
    InvalidInterval { a: f64, b: f64 },

    #[error("{algorithm} exceeded {max_evaluations} evaluations; last estimate {last_estimate}")]
    MaxEvaluationsExceeded { algorithm: Algorithm, max_evaluations: usize, last_estimate: f64 },

    #[error("integrand non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },
}
