//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates every solver in the
//! crate, along with the numerical thresholds shared by all of them.

use super::objective::Capability;


/// Evaluation budget used when none is configured.
pub const DEFAULT_MAX_EVALUATIONS: usize = 100;

/// Requested `x_accuracy` is floored at this value before solving.
pub const ACCURACY_FLOOR: f64 = 1e-15;

/// `|f(x)|` below this counts as an exact root (bracket endpoints, Brent).
pub const ZERO_THRESHOLD: f64 = 1e-15;

/// `|f'(x)|` (Newton) or `|2f'² - f·f''|` (Halley) below this is degenerate
/// and triggers a fallback.
pub const DEGENERACY_THRESHOLD: f64 = 1e-15;


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`]    value-only methods that never leave `[x_min, x_max]`
/// - [`Algorithm::Derivative`] derivative-aware methods with a bracketing fallback
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Derivative(DerivativeFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily {
    Brent,
    Ridder,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DerivativeFamily {
    Newton,
    Halley,
}

impl Algorithm {
    /// Minimum derivative order the objective must expose.
    pub const fn required_capability(self) -> Capability {
        match self {
            Algorithm::Bracket(..)                          => Capability::Value,
            Algorithm::Derivative(DerivativeFamily::Newton) => Capability::FirstDerivative,
            Algorithm::Derivative(DerivativeFamily::Halley) => Capability::SecondDerivative,
        }
    }

    /// Budget units charged for one pass of the algorithm.
    ///
    /// # Notes
    /// - Newton bundles `f` and `f'` into one unit.
    /// - Halley bundles `f`, `f'` and `f''` into two units.
    /// - Bracketing methods charge one unit per `f` call; Ridder makes two
    ///   calls per pass and is charged per call.
    pub const fn evaluations_per_pass(self) -> usize {
        match self {
            Algorithm::Derivative(DerivativeFamily::Halley) => 2,
            _                                               => 1,
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Brent)        => "brent",
            Algorithm::Bracket(BracketFamily::Ridder)       => "ridder",
            Algorithm::Derivative(DerivativeFamily::Newton) => "newton",
            Algorithm::Derivative(DerivativeFamily::Halley) => "halley",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
