//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : every failure a [`crate::root_finding::solver::Solver1D`] can surface
//! │  ├ budget exhausted without meeting `x_accuracy`     (`NonConvergence`)
//! │  ├ objective lacks the derivative order required     (`UnsupportedObjective`)
//! │  ├ invalid accuracy / guess / budget                 (`InvalidParameter`, `InvalidMaxEvaluations`)
//! │  ├ invalid or unbracketed interval                   (`InvalidBracket`, `RootNotBracketed`, `OutsideDomain`)
//! │  └ NaN / inf from the objective or its derivatives   (`NonFiniteEvaluation`, `NonFiniteDerivative`)
//!
//! Zero derivatives, zero Halley denominators and steps that leave the
//! bracket are not errors: they hand control to the fallback solver.

use thiserror::Error;
use super::algorithms::Algorithm;
use super::objective::Capability;


#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("{algorithm} failed to converge within {max_evaluations} evaluations; last estimate {last_root}")]
    NonConvergence { algorithm: Algorithm, max_evaluations: usize, last_root: f64 },

    #[error("{algorithm} requires an objective exposing {required}, got {provided}")]
    UnsupportedObjective { algorithm: Algorithm, required: Capability, provided: Capability },

    #[error("invalid `{name}`: {reason}. got {got}")]
    InvalidParameter { name: &'static str, reason: &'static str, got: f64 },

    #[error("invalid max_evaluations: must be >= 1. got {got}")]
    InvalidMaxEvaluations { got: usize },

    #[error("invalid bracket: x_min and x_max must be finite with x_min < x_max. got [{x_min}, {x_max}]")]
    InvalidBracket { x_min: f64, x_max: f64 },

    #[error("bracket [{x_min}, {x_max}] leaves the enforced domain [{lower}, {upper}]")]
    OutsideDomain { x_min: f64, x_max: f64, lower: f64, upper: f64 },

    #[error("root not bracketed: f({x_min}) = {fx_min}, f({x_max}) = {fx_max}")]
    RootNotBracketed { x_min: f64, x_max: f64, fx_min: f64, fx_max: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("derivative of order {order} non-finite at x={x}, got {got}")]
    NonFiniteDerivative { x: f64, order: usize, got: f64 },
}
