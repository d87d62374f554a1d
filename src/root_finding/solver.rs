//! The [`Solver1D`] state machine.
//!
//! Every solver exposes the same entry points; only
//! [`Solver1D::solve_impl`] differs between algorithms.
//!
//! ┌ [`Solver1D::solve`]             : bracketed solve, returns the root
//! ├ [`Solver1D::solve_with_report`] : bracketed solve, returns a [`RootFindingReport`]
//! └ [`Solver1D::solve_with_step`]   : grows a bracket from a guess, then solves
//!
//! # Entry validation (shared)
//! 1. capability check against [`Algorithm::required_capability`], no evaluation spent
//! 2. `x_accuracy` finite and > 0, floored at [`ACCURACY_FLOOR`]
//! 3. `x_min < x_max`, both finite, inside the configured domain bounds
//! 4. `f(x_min)`, `f(x_max)` evaluated (2 units); an endpoint with
//!    `|f| < ZERO_THRESHOLD` is returned directly, otherwise the signs must differ
//! 5. `guess` clamped to `(x_min, x_max)` by `x_accuracy`

use super::algorithms::{Algorithm, ACCURACY_FLOOR, ZERO_THRESHOLD};
use super::config::CommonCfg;
use super::errors::RootFindingError;
use super::objective::ObjectiveFunction;
use super::report::RootFindingReport;
use super::state::{checked_value, SolverState};


/// Growth factor applied to the bracket by [`Solver1D::solve_with_step`].
const BRACKET_GROWTH: f64 = 1.6;


pub trait Solver1D {
    fn algorithm(&self) -> Algorithm;

    fn common(&self) -> &CommonCfg;

    /// Algorithm body. `state` holds a validated, sign-changing bracket and a
    /// clamped initial `root`; two budget units are already spent.
    fn solve_impl(
        &self,
        f: &dyn ObjectiveFunction,
        state: &mut SolverState
    ) -> Result<RootFindingReport, RootFindingError>;

    /// Finds a root of `f` inside `[x_min, x_max]`.
    ///
    /// # Errors
    /// - [`RootFindingError::UnsupportedObjective`] : `f` lacks the required derivatives
    /// - [`RootFindingError::InvalidParameter`]     : `x_accuracy` or `guess` invalid
    /// - [`RootFindingError::InvalidBracket`]       : `x_min >= x_max` or non-finite
    /// - [`RootFindingError::OutsideDomain`]        : bracket exceeds configured bounds
    /// - [`RootFindingError::RootNotBracketed`]     : `f(x_min)·f(x_max) >= 0`
    /// - [`RootFindingError::NonConvergence`]       : budget exhausted (own or fallback's)
    /// - [`RootFindingError::NonFiniteEvaluation`]  : NaN / inf from `f`
    fn solve(
        &self,
        f: &dyn ObjectiveFunction,
        x_accuracy: f64,
        guess: f64,
        x_min: f64,
        x_max: f64,
    ) -> Result<f64, RootFindingError> {
        self.solve_with_report(f, x_accuracy, guess, x_min, x_max)
            .map(|report| report.root)
    }

    /// Same as [`Solver1D::solve`] but returns the full [`RootFindingReport`].
    fn solve_with_report(
        &self,
        f: &dyn ObjectiveFunction,
        x_accuracy: f64,
        guess: f64,
        x_min: f64,
        x_max: f64,
    ) -> Result<RootFindingReport, RootFindingError> {
        let algorithm  = self.algorithm();
        let x_accuracy = validate_entry(algorithm, f, x_accuracy, guess)?;

        let common = self.common();
        if !x_min.is_finite() || !x_max.is_finite() || x_min >= x_max {
            return Err(RootFindingError::InvalidBracket { x_min, x_max });
        }
        let lower = common.lower_bound().unwrap_or(f64::NEG_INFINITY);
        let upper = common.upper_bound().unwrap_or(f64::INFINITY);
        if x_min < lower || x_max > upper {
            return Err(RootFindingError::OutsideDomain { x_min, x_max, lower, upper });
        }

        // early exit: an endpoint is a root
        let fx_min = checked_value(f, x_min)?;
        if fx_min.abs() < ZERO_THRESHOLD {
            return Ok(RootFindingReport::converged(algorithm, x_min, 1));
        }
        let fx_max = checked_value(f, x_max)?;
        if fx_max.abs() < ZERO_THRESHOLD {
            return Ok(RootFindingReport::converged(algorithm, x_max, 2));
        }

        if fx_min * fx_max >= 0.0 {
            return Err(RootFindingError::RootNotBracketed { x_min, x_max, fx_min, fx_max });
        }

        let root = if guess <= x_min {
            x_min + x_accuracy
        } else if guess >= x_max {
            x_max - x_accuracy
        } else {
            guess
        };

        let mut state = SolverState {
            root,
            x_min,
            x_max,
            fx_min,
            fx_max,
            x_accuracy,
            evaluations     : 2,
            max_evaluations : common.max_evaluations(),
        };

        self.solve_impl(f, &mut state)
    }

    /// Finds a root of `f` starting from `guess` without a known bracket.
    ///
    /// The interval `[guess - step, guess]` or `[guess, guess + step]` is grown
    /// by a factor of 1.6 on the side with the smaller `|f|` until `f` changes
    /// sign, clamped to the configured domain bounds. The bracketed solve that
    /// follows starts with a fresh budget.
    ///
    /// # Errors
    /// - [`RootFindingError::NonConvergence`] : no sign change within the budget
    /// - as [`Solver1D::solve`] otherwise
    fn solve_with_step(
        &self,
        f: &dyn ObjectiveFunction,
        x_accuracy: f64,
        guess: f64,
        step: f64,
    ) -> Result<f64, RootFindingError> {
        let algorithm = self.algorithm();
        let common    = self.common();
        validate_entry(algorithm, f, x_accuracy, guess)?;
        if !step.is_finite() || step <= 0.0 {
            return Err(RootFindingError::InvalidParameter {
                name: "step", reason: "must be finite and > 0", got: step
            });
        }

        let max_evaluations = common.max_evaluations();
        let mut evaluations = 1;

        let mut fx_max = checked_value(f, guess)?;
        if fx_max.abs() < ZERO_THRESHOLD {
            return Ok(guess);
        }

        let (mut x_min, mut x_max, mut fx_min);
        if fx_max > 0.0 {
            x_min  = common.enforce_bounds(guess - step);
            fx_min = checked_value(f, x_min)?;
            x_max  = guess;
        } else {
            x_min  = guess;
            fx_min = fx_max;
            x_max  = common.enforce_bounds(guess + step);
            fx_max = checked_value(f, x_max)?;
        }
        evaluations += 1;

        let mut flip = false;
        while evaluations <= max_evaluations {
            if fx_min * fx_max <= 0.0 {
                if fx_min.abs() < ZERO_THRESHOLD { return Ok(x_min); }
                if fx_max.abs() < ZERO_THRESHOLD { return Ok(x_max); }
                tracing::trace!(%algorithm, x_min, x_max, evaluations, "bracket found");
                return self.solve(f, x_accuracy, guess, x_min, x_max);
            }

            let grow_left = if fx_min.abs() != fx_max.abs() {
                fx_min.abs() < fx_max.abs()
            } else {
                flip = !flip;
                flip
            };

            if grow_left {
                x_min  = common.enforce_bounds(x_min + BRACKET_GROWTH * (x_min - x_max));
                fx_min = checked_value(f, x_min)?;
            } else {
                x_max  = common.enforce_bounds(x_max + BRACKET_GROWTH * (x_max - x_min));
                fx_max = checked_value(f, x_max)?;
            }
            evaluations += 1;
        }

        Err(RootFindingError::NonConvergence {
            algorithm,
            max_evaluations,
            last_root: guess,
        })
    }
}


/// Capability, accuracy and guess checks shared by every entry point.
/// Returns the floored accuracy.
fn validate_entry(
    algorithm: Algorithm,
    f: &dyn ObjectiveFunction,
    x_accuracy: f64,
    guess: f64,
) -> Result<f64, RootFindingError> {
    let required = algorithm.required_capability();
    if !f.supports(required) {
        return Err(RootFindingError::UnsupportedObjective {
            algorithm,
            required,
            provided: f.capability(),
        });
    }
    if !x_accuracy.is_finite() || x_accuracy <= 0.0 {
        return Err(RootFindingError::InvalidParameter {
            name: "x_accuracy", reason: "must be finite and > 0", got: x_accuracy
        });
    }
    if !guess.is_finite() {
        return Err(RootFindingError::InvalidParameter {
            name: "guess", reason: "must be finite", got: guess
        });
    }

    Ok(x_accuracy.max(ACCURACY_FLOOR))
}
