//! Delegation from Newton / Halley to the bracketing fallback.
use std::f64::consts::FRAC_PI_2;

use boundary_kernel::root_finding::algorithms::{Algorithm, BracketFamily};
use boundary_kernel::root_finding::{
    Differentiable, Fallback, FallbackReason, Newton, RootFindingError, Solver1D, Termination,
};

type TestResult = Result<(), RootFindingError>;

#[test]
fn zero_derivative_delegates_to_brent() -> TestResult {
    // f'(0) = 0 at the guess
    let f = Differentiable::new(|x: f64| x * x * x - 1.0, |x: f64| 3.0 * x * x);

    let rep = Newton::new().solve_with_report(&f, 1e-12, 0.0, -1.0, 2.0)?;

    assert_eq!(
        rep.termination,
        Termination::FallbackDelegated {
            reason:   FallbackReason::ZeroDerivative,
            fallback: Algorithm::Bracket(BracketFamily::Brent),
        }
    );
    assert!(rep.delegated());
    assert_eq!(rep.algorithm_name, "newton");
    assert!((-1.0..=2.0).contains(&rep.root));
    assert!((rep.root - 1.0).abs() <= 1e-10);
    Ok(())
}

#[test]
fn ridder_fallback_is_selectable() -> TestResult {
    let f = Differentiable::new(|x: f64| x * x * x - 1.0, |x: f64| 3.0 * x * x);

    let solver = Newton::new().set_fallback(Fallback::Ridder);
    assert_eq!(solver.fallback(), Fallback::Ridder);

    let rep = solver.solve_with_report(&f, 1e-12, 0.0, -1.0, 2.0)?;
    assert_eq!(
        rep.termination,
        Termination::FallbackDelegated {
            reason:   FallbackReason::ZeroDerivative,
            fallback: Algorithm::Bracket(BracketFamily::Ridder),
        }
    );
    assert!((-1.0..=2.0).contains(&rep.root));
    assert!((rep.root.powi(3) - 1.0).abs() <= 1e-12);
    Ok(())
}

#[test]
fn step_leaving_bracket_delegates() -> TestResult {
    // from 0.05 the tangent of cos lands near x = 20
    let f = Differentiable::new(|x: f64| x.cos(), |x: f64| -x.sin());

    let rep = Newton::new().solve_with_report(&f, 1e-12, 0.05, 0.0, 2.0)?;

    assert!(matches!(
        rep.termination,
        Termination::FallbackDelegated { reason: FallbackReason::LeftBracket, .. }
    ));
    assert!((rep.root - FRAC_PI_2).abs() <= 1e-12);
    Ok(())
}

#[test]
fn delegated_evaluations_include_both_solvers() -> TestResult {
    let f = Differentiable::new(|x: f64| x * x * x - 1.0, |x: f64| 3.0 * x * x);

    let rep = Newton::new().solve_with_report(&f, 1e-12, 0.0, -1.0, 2.0)?;
    // 2 endpoints + 1 Newton pass before delegation, then the fallback's own
    // 2 endpoints and at least one interior point
    assert!(rep.evaluations >= 6);
    assert!(rep.evaluations <= 100);
    Ok(())
}

#[test]
fn pathological_function_exhausts_budget() -> TestResult {
    // sign change across a pole, no root in [-1, 2]
    let f = Differentiable::new(|x: f64| 1.0 / x, |x: f64| -1.0 / (x * x));

    let err = Newton::new()
        .set_max_evaluations(5)?
        .solve(&f, 1e-12, 1.0, -1.0, 2.0)
        .unwrap_err();

    // Newton hands the single remaining unit to Brent, which cannot use it
    match err {
        RootFindingError::NonConvergence { algorithm, max_evaluations, .. } => {
            assert_eq!(algorithm, Algorithm::Bracket(BracketFamily::Brent));
            assert_eq!(max_evaluations, 1);
        }
        other => panic!("expected NonConvergence, got {other:?}"),
    }
    Ok(())
}

#[test]
fn pathological_function_never_loops() -> TestResult {
    let f = Differentiable::new(|x: f64| 1.0 / x, |x: f64| -1.0 / (x * x));

    for budget in 1..=40 {
        let res = Newton::new()
            .set_max_evaluations(budget)?
            .solve(&f, 1e-12, 1.0, -1.0, 2.0);
        assert!(matches!(res, Err(RootFindingError::NonConvergence { .. })));
    }
    Ok(())
}
