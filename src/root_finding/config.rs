//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with the evaluation budget and the optional domain
//! bounds, used by every solver.
//!
//! [`CommonCfg`] : universal fields
//! ├ `max_evaluations` : evaluation budget per `solve` call
//! ├ `lower_bound`     : optional hard floor on any evaluated `x`
//! └ `upper_bound`     : optional hard ceiling on any evaluated `x`
//!
//! [`CommonCfg::new`] initializes configuration with default values.
//!
//! Derivative-aware solvers carry one more field selecting which
//! bracketing solver they hand control to (see [`crate::root_finding::fallback`]).

use super::algorithms::DEFAULT_MAX_EVALUATIONS;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    max_evaluations: usize,
    lower_bound:     Option<f64>,
    upper_bound:     Option<f64>,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            max_evaluations : DEFAULT_MAX_EVALUATIONS,
            lower_bound     : None,
            upper_bound     : None,
        }
    }

    // getters
    pub fn max_evaluations(&self) -> usize       { self.max_evaluations }
    pub fn lower_bound(&self)     -> Option<f64> { self.lower_bound }
    pub fn upper_bound(&self)     -> Option<f64> { self.upper_bound }

    // setters (internal)
    pub(crate) fn with_max_evaluations (&mut self, v: usize) { self.max_evaluations = v; }
    pub(crate) fn with_lower_bound     (&mut self, v: f64)   { self.lower_bound     = Some(v); }
    pub(crate) fn with_upper_bound     (&mut self, v: f64)   { self.upper_bound     = Some(v); }

    /// Clamps `x` into the configured domain bounds.
    #[inline]
    pub(crate) fn enforce_bounds(&self, x: f64) -> f64 {
        match (self.lower_bound, self.upper_bound) {
            (Some(lo), _) if x < lo => lo,
            (_, Some(hi)) if x > hi => hi,
            _                       => x,
        }
    }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_max_evaluations(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidMaxEvaluations { got: v }
                    );
                }
                self.common.with_max_evaluations(v);
                Ok(self)
            }
            pub fn set_lower_bound(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v.is_nan() {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidParameter {
                            name: "lower_bound", reason: "must not be NaN", got: v
                        }
                    );
                }
                if let Some(hi) = self.common.upper_bound() {
                    if v >= hi {
                        return Err(
                            $crate::root_finding::errors::RootFindingError::InvalidParameter {
                                name: "lower_bound", reason: "must be < upper_bound", got: v
                            }
                        );
                    }
                }
                self.common.with_lower_bound(v);
                Ok(self)
            }
            pub fn set_upper_bound(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v.is_nan() {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidParameter {
                            name: "upper_bound", reason: "must not be NaN", got: v
                        }
                    );
                }
                if let Some(lo) = self.common.lower_bound() {
                    if v <= lo {
                        return Err(
                            $crate::root_finding::errors::RootFindingError::InvalidParameter {
                                name: "upper_bound", reason: "must be > lower_bound", got: v
                            }
                        );
                    }
                }
                self.common.with_upper_bound(v);
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
