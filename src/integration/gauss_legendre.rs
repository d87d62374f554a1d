//! Fixed-order Gauss–Legendre quadrature.
//!
//! An `n`-point rule integrates polynomials of degree `2n - 1` exactly.
//! Nodes and weights are computed once at construction; every call costs
//! exactly `n` integrand evaluations.

use std::f64::consts::PI;

use super::algorithms::Algorithm;
use super::errors::IntegrationError;
use super::state::IntegratorState;
use super::traits::Integrator;


/// Reported as `absolute_error` after every call. Not a measured quantity.
pub const NOMINAL_ABSOLUTE_ERROR: f64 = 1e-15;

const NEWTON_TOL: f64      = 1e-15;
const NEWTON_MAX_ITER: usize = 100;


/// Gauss–Legendre integrator of fixed order.
///
/// # Fields
/// - `state`   : [`IntegratorState`]; accuracy 0 (implied by the order), budget = order
/// - `nodes`   : abscissae on `[-1, 1]`, ascending
/// - `weights` : matching weights, summing to 2
#[derive(Debug, Clone)]
pub struct GaussLegendre {
    state:   IntegratorState,
    nodes:   Vec<f64>,
    weights: Vec<f64>,
}

impl GaussLegendre {
    /// Builds an `order`-point rule.
    ///
    /// # Errors
    /// - [`IntegrationError::InvalidParameter`] : `order == 0`
    pub fn new(order: usize) -> Result<Self, IntegrationError> {
        if order == 0 {
            return Err(IntegrationError::InvalidParameter {
                name: "order", reason: "need at least 1 node", got: 0.0
            });
        }
        let (nodes, weights) = legendre_nodes_weights(order);

        Ok(Self {
            state: IntegratorState::new(0.0, order),
            nodes,
            weights,
        })
    }

    pub fn order(&self)   -> usize  { self.nodes.len() }
    pub fn nodes(&self)   -> &[f64] { &self.nodes }
    pub fn weights(&self) -> &[f64] { &self.weights }
}


/// Roots of `P_n` and their weights via Newton iteration on the three-term
/// recurrence. Symmetry halves the work.
fn legendre_nodes_weights(n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut nodes   = vec![0.0; n];
    let mut weights = vec![0.0; n];
    let nf = n as f64;

    for i in 0..n.div_ceil(2) {
        // Tricomi initial guess for the i-th largest root
        let mut z  = (PI * (i as f64 + 0.75) / (nf + 0.5)).cos();
        let mut dp = 1.0;

        for _ in 0..NEWTON_MAX_ITER {
            let (p, p_prev) = legendre_pair(n, z);
            dp = nf * (z * p - p_prev) / (z * z - 1.0);

            let z_prev = z;
            z = z_prev - p / dp;
            if (z - z_prev).abs() <= NEWTON_TOL {
                break;
            }
        }

        let w = 2.0 / ((1.0 - z * z) * dp * dp);
        nodes[i]         = -z;
        nodes[n - 1 - i] = z;
        weights[i]         = w;
        weights[n - 1 - i] = w;
    }

    (nodes, weights)
}

/// `(P_n(z), P_{n-1}(z))` by the Bonnet recurrence.
#[inline]
fn legendre_pair(n: usize, z: f64) -> (f64, f64) {
    let mut p1 = 1.0;
    let mut p2 = 0.0;
    for j in 0..n {
        let jf = j as f64;
        let p3 = p2;
        p2 = p1;
        p1 = ((2.0 * jf + 1.0) * z * p2 - jf * p3) / (jf + 1.0);
    }
    (p1, p2)
}


impl Integrator for GaussLegendre {
    fn algorithm(&self) -> Algorithm { Algorithm::GaussLegendre }

    fn state(&self) -> &IntegratorState { &self.state }

    fn state_mut(&mut self) -> &mut IntegratorState { &mut self.state }

    /// # Behavior
    /// - Maps the nodes from `[-1, 1]` onto `[a, b]` and sums `w_i f(x_i)`.
    /// - `number_of_evaluations` is always the order.
    /// - `absolute_error` is [`NOMINAL_ABSOLUTE_ERROR`]; a fixed rule carries
    ///   no error estimate, so callers must not treat it as authoritative.
    fn integrate_impl(
        &mut self,
        f: &dyn Fn(f64) -> f64,
        a: f64,
        b: f64,
    ) -> Result<f64, IntegrationError> {
        let mid        = 0.5 * (a + b);
        let half_width = 0.5 * (b - a);

        let mut sum = 0.0;
        for (&node, &weight) in self.nodes.iter().zip(&self.weights) {
            sum += weight * f(mid + half_width * node);
        }

        self.state.with_number_of_evaluations(self.nodes.len());
        self.state.with_absolute_error(NOMINAL_ABSOLUTE_ERROR);

        Ok(sum * half_width)
    }
}
