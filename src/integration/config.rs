//! Shared setters for adaptive integrators.
//!
//! Both inputs of [`crate::integration::state::IntegratorState`] are set the
//! same way on every adaptive algorithm:
//! ├ `set_absolute_accuracy` : finite and > 0
//! └ `set_max_evaluations`   : >= 1

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_absolute_accuracy(
                mut self, v: f64
            ) -> Result<Self, $crate::integration::errors::IntegrationError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::integration::errors::IntegrationError::InvalidParameter {
                            name: "absolute_accuracy", reason: "must be finite and > 0", got: v
                        }
                    );
                }
                self.state.with_absolute_accuracy(v);
                Ok(self)
            }
            pub fn set_max_evaluations(
                mut self, v: usize
            ) -> Result<Self, $crate::integration::errors::IntegrationError> {
                if v == 0 {
                    return Err(
                        $crate::integration::errors::IntegrationError::InvalidParameter {
                            name: "max_evaluations", reason: "must be >= 1", got: v as f64
                        }
                    );
                }
                self.state.with_max_evaluations(v);
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
