//! Objective functions handed to a solver.
//!
//! [`ObjectiveFunction`] is the single seam between a caller and every
//! [`crate::root_finding::solver::Solver1D`]. What a function can do is tagged
//! up front by [`ObjectiveFunction::capability`], so a solver rejects an
//! under-equipped objective before spending any evaluation.
//!
//! ┌ [`ValueOnly`]           : `f`
//! ├ [`Differentiable`]      : `f`, `f'`
//! └ [`TwiceDifferentiable`] : `f`, `f'`, `f''`
//!
//! Objective functions must be pure: evaluating twice at the same point
//! yields the same result.


/// Derivative orders an objective can expose, ordered by strength.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    Value,
    FirstDerivative,
    SecondDerivative,
}
impl Capability {
    pub const fn name(self) -> &'static str {
        match self {
            Capability::Value            => "value",
            Capability::FirstDerivative  => "first derivative",
            Capability::SecondDerivative => "second derivative",
        }
    }
}
impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}


/// A scalar function `f: R -> R`, optionally paired with `f'` and `f''`.
///
/// Implementors must keep [`ObjectiveFunction::capability`] consistent with
/// the derivative methods: an objective tagged
/// [`Capability::FirstDerivative`] returns `Some` from
/// [`ObjectiveFunction::derivative`], and so on.
pub trait ObjectiveFunction {
    fn value(&self, x: f64) -> f64;

    #[inline]
    fn capability(&self) -> Capability { Capability::Value }

    #[inline]
    fn derivative(&self, _x: f64) -> Option<f64> { None }

    #[inline]
    fn second_derivative(&self, _x: f64) -> Option<f64> { None }

    /// `true` if this objective exposes at least `required`.
    #[inline]
    fn supports(&self, required: Capability) -> bool {
        self.capability() >= required
    }
}

impl<T: ObjectiveFunction + ?Sized> ObjectiveFunction for &T {
    fn value(&self, x: f64) -> f64 { (**self).value(x) }
    fn capability(&self) -> Capability { (**self).capability() }
    fn derivative(&self, x: f64) -> Option<f64> { (**self).derivative(x) }
    fn second_derivative(&self, x: f64) -> Option<f64> { (**self).second_derivative(x) }
}


/// Value-only objective. Enough for bracketing solvers.
#[derive(Debug, Copy, Clone)]
pub struct ValueOnly<F> {
    f: F,
}
impl<F> ValueOnly<F>
where F: Fn(f64) -> f64 {
    pub fn new(f: F) -> Self { Self { f } }
}
impl<F> ObjectiveFunction for ValueOnly<F>
where F: Fn(f64) -> f64 {
    #[inline]
    fn value(&self, x: f64) -> f64 { (self.f)(x) }
}


/// Objective with an analytic first derivative. Required by Newton.
#[derive(Debug, Copy, Clone)]
pub struct Differentiable<F, G> {
    f:  F,
    df: G,
}
impl<F, G> Differentiable<F, G>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    pub fn new(f: F, df: G) -> Self { Self { f, df } }
}
impl<F, G> ObjectiveFunction for Differentiable<F, G>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    #[inline]
    fn value(&self, x: f64) -> f64 { (self.f)(x) }

    #[inline]
    fn capability(&self) -> Capability { Capability::FirstDerivative }

    #[inline]
    fn derivative(&self, x: f64) -> Option<f64> { Some((self.df)(x)) }
}


/// Objective with analytic first and second derivatives. Required by Halley.
#[derive(Debug, Copy, Clone)]
pub struct TwiceDifferentiable<F, G, H> {
    f:   F,
    df:  G,
    d2f: H,
}
impl<F, G, H> TwiceDifferentiable<F, G, H>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
    H: Fn(f64) -> f64,
{
    pub fn new(f: F, df: G, d2f: H) -> Self { Self { f, df, d2f } }
}
impl<F, G, H> ObjectiveFunction for TwiceDifferentiable<F, G, H>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
    H: Fn(f64) -> f64,
{
    #[inline]
    fn value(&self, x: f64) -> f64 { (self.f)(x) }

    #[inline]
    fn capability(&self) -> Capability { Capability::SecondDerivative }

    #[inline]
    fn derivative(&self, x: f64) -> Option<f64> { Some((self.df)(x)) }

    #[inline]
    fn second_derivative(&self, x: f64) -> Option<f64> { Some((self.d2f)(x)) }
}
