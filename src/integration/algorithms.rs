//! Quadrature algorithm variants.
//!
//! - [`Algorithm::GaussLegendre`] fixed order, deterministic cost
//! - [`Algorithm::TanhSinh`]      adaptive double-exponential, level-capped
//! - [`Algorithm::Simpson`]       adaptive Simpson, hard evaluation budget

/// Absolute accuracy used when none is configured.
pub const DEFAULT_ABSOLUTE_ACCURACY: f64 = 1e-10;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    GaussLegendre,
    TanhSinh,
    Simpson,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::GaussLegendre => "gauss_legendre",
            Algorithm::TanhSinh      => "tanh_sinh",
            Algorithm::Simpson       => "simpson",
        }
    }

    /// `true` if the algorithm refines until an accuracy target is met.
    pub const fn is_adaptive(self) -> bool {
        !matches!(self, Algorithm::GaussLegendre)
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
