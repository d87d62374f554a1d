//! One-dimensional definite integration.
//!
//! ┌ [`traits`]         : the [`Integrator`] trait, orientation handling
//! ├ [`state`]          : accuracy / budget inputs and per-call outputs
//! ├ [`gauss_legendre`] : fixed order, exact cost
//! ├ [`tanh_sinh`]      : adaptive, level-capped
//! └ [`simpson`]        : adaptive, hard evaluation budget

// common helpers
pub mod algorithms;
pub mod errors;
pub mod state;
pub mod traits;
mod config;

// algorithms
pub mod gauss_legendre;
pub mod tanh_sinh;
pub mod simpson;

pub use algorithms::Algorithm;
pub use errors::IntegrationError;
pub use state::IntegratorState;
pub use traits::Integrator;
pub use gauss_legendre::GaussLegendre;
pub use tanh_sinh::TanhSinh;
pub use simpson::Simpson;
