//! Bookkeeping shared by every integrator.
//!
//! [`IntegratorState`]
//! ├ `absolute_accuracy`     : target accuracy (input)
//! ├ `max_evaluations`       : evaluation budget (input; advisory for some algorithms)
//! ├ `absolute_error`        : error reported by the last call (output)
//! └ `number_of_evaluations` : integrand calls made by the last call (output)
//!
//! The outputs describe the *last* call only; they are reset at the start of
//! every [`crate::integration::Integrator::integrate`].

#[derive(Debug, Copy, Clone)]
pub struct IntegratorState {
    absolute_accuracy:     f64,
    max_evaluations:       usize,
    absolute_error:        f64,
    number_of_evaluations: usize,
}

impl IntegratorState {
    pub fn new(absolute_accuracy: f64, max_evaluations: usize) -> Self {
        Self {
            absolute_accuracy,
            max_evaluations,
            absolute_error:        0.0,
            number_of_evaluations: 0,
        }
    }

    // getters
    pub fn absolute_accuracy(&self)     -> f64   { self.absolute_accuracy }
    pub fn max_evaluations(&self)       -> usize { self.max_evaluations }
    pub fn absolute_error(&self)        -> f64   { self.absolute_error }
    pub fn number_of_evaluations(&self) -> usize { self.number_of_evaluations }

    // setters (internal)
    pub(crate) fn with_absolute_accuracy    (&mut self, v: f64)   { self.absolute_accuracy     = v; }
    pub(crate) fn with_max_evaluations      (&mut self, v: usize) { self.max_evaluations       = v; }
    pub(crate) fn with_absolute_error       (&mut self, v: f64)   { self.absolute_error        = v; }
    pub(crate) fn with_number_of_evaluations(&mut self, v: usize) { self.number_of_evaluations = v; }

    pub(crate) fn reset(&mut self) {
        self.absolute_error        = 0.0;
        self.number_of_evaluations = 0;
    }
}
