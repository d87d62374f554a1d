//! Interpolation error types.
//!
//! [`InterpolationError`]
//! ├ construction : unequal lengths, too few points, bad nodes, bad parameter
//! ├ update       : replacement sample of the wrong length, non-finite sample
//! └ evaluation   : query outside the interpolation domain

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("length mismatch: expected {expected} samples, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("insufficient points: got {got}, need at least {need}")]
    InsufficientPoints { got: usize, need: usize },

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("x-values must be strictly increasing")]
    NonIncreasingX,

    #[error("evaluation point {got} out of bounds in ({x_min}, {x_max})")]
    OutOfBounds { got: f64, x_min: f64, x_max: f64 },

    #[error("invalid `{name}`: {reason}. got {got}")]
    InvalidParameter { name: &'static str, reason: &'static str, got: f64 },
}
