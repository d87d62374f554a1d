//! Per-call solver state.
//!
//! A fresh [`SolverState`] is built by every
//! [`crate::root_finding::solver::Solver1D::solve`] call after the bracket
//! has been validated, mutated by the algorithm, and dropped when the call
//! returns. Counters never leak between unrelated solves.

use super::algorithms::Algorithm;
use super::errors::RootFindingError;
use super::objective::ObjectiveFunction;


#[derive(Debug, Copy, Clone)]
pub struct SolverState {
    /// current root estimate
    pub root:            f64,
    pub x_min:           f64,
    pub x_max:           f64,
    pub fx_min:          f64,
    pub fx_max:          f64,
    pub x_accuracy:      f64,
    /// budget units consumed so far, including the bracket endpoints
    pub evaluations:     usize,
    pub max_evaluations: usize,
}

impl SolverState {
    /// Budget units still available.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.max_evaluations.saturating_sub(self.evaluations)
    }

    /// `true` if `x` lies within `[x_min, x_max]`,
    /// i.e. `(x_min - x) * (x - x_max) >= 0`.
    #[inline]
    pub fn in_bracket(&self, x: f64) -> bool {
        (self.x_min - x) * (x - self.x_max) >= 0.0
    }

    /// Evaluates `f(x)`, charging one budget unit.
    pub fn evaluate(
        &mut self,
        f: &dyn ObjectiveFunction,
        x: f64
    ) -> Result<f64, RootFindingError> {
        self.evaluations += 1;
        checked_value(f, x)
    }

    /// Error reported when `algorithm` runs out of budget.
    pub fn exhausted(&self, algorithm: Algorithm) -> RootFindingError {
        RootFindingError::NonConvergence {
            algorithm,
            max_evaluations: self.max_evaluations,
            last_root:       self.root,
        }
    }
}


/// Evaluates `f(x)` with a finite check. Does not touch any counter.
#[inline]
pub(crate) fn checked_value(
    f: &dyn ObjectiveFunction,
    x: f64
) -> Result<f64, RootFindingError> {
    let fx = f.value(x);
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx });
    }

    Ok(fx)
}

/// Validates a derivative value returned by the objective.
#[inline]
pub(crate) fn checked_derivative(
    x: f64,
    order: usize,
    value: Option<f64>,
    algorithm: Algorithm,
    f: &dyn ObjectiveFunction,
) -> Result<f64, RootFindingError> {
    let required = algorithm.required_capability();
    let got = value.ok_or(RootFindingError::UnsupportedObjective {
        algorithm,
        required,
        provided: f.capability(),
    })?;
    if !got.is_finite() {
        return Err(RootFindingError::NonFiniteDerivative { x, order, got });
    }

    Ok(got)
}
