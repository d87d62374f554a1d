//! Interpolation algorithm variants.
//!
//! - [`Algorithm::Chebyshev`] polynomial on Chebyshev nodes over `[-1, 1]`
//! - [`Algorithm::Linear`]    piecewise linear on supplied nodes
//! - [`Algorithm::Newton`]    global polynomial by divided differences

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Chebyshev,
    Linear,
    Newton,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Chebyshev => "chebyshev",
            Algorithm::Linear    => "linear",
            Algorithm::Newton    => "newton",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
