use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use boundary_kernel::integration::{Algorithm, IntegrationError, Integrator, Simpson};

type TestResult = Result<(), IntegrationError>;

#[test]
fn integrates_sin_over_half_period() -> TestResult {
    let mut s = Simpson::new();

    let v = s.integrate(&f64::sin, 0.0, PI)?;
    assert_abs_diff_eq!(v, 2.0, epsilon = 1e-9);
    assert!(s.absolute_error() <= s.absolute_accuracy());
    Ok(())
}

#[test]
fn exact_on_cubics_after_minimum_refinements() -> TestResult {
    let mut s = Simpson::new();

    let v = s.integrate(&|x: f64| x * x * x, 0.0, 2.0)?;
    assert_abs_diff_eq!(v, 4.0, epsilon = 1e-12);
    // 2 endpoints + 1 + 2 + ... + 32 midpoints
    assert_eq!(s.number_of_evaluations(), 65);
    Ok(())
}

#[test]
fn outputs_follow_the_latest_accuracy_target() -> TestResult {
    let mut s = Simpson::new().set_absolute_accuracy(1e-4)?;

    s.integrate(&f64::exp, 0.0, 1.0)?;
    let coarse_evaluations = s.number_of_evaluations();
    assert!(s.absolute_error() <= 1e-4);

    s = s.set_absolute_accuracy(1e-12)?;
    let v = s.integrate(&f64::exp, 0.0, 1.0)?;

    let mut fresh = Simpson::new().set_absolute_accuracy(1e-12)?;
    let expected  = fresh.integrate(&f64::exp, 0.0, 1.0)?;
    assert_eq!(v, expected);
    // measured |ΔS| of this call only
    assert_eq!(s.absolute_error(), fresh.absolute_error());
    assert!(s.absolute_error() <= 1e-12);
    assert_eq!(s.number_of_evaluations(), fresh.number_of_evaluations());
    assert!(s.number_of_evaluations() >= coarse_evaluations);
    Ok(())
}

#[test]
fn empty_interval_runs_the_minimum_refinements() -> TestResult {
    let mut s = Simpson::new();

    assert_eq!(s.integrate(&f64::exp, 1.0, 1.0)?, 0.0);
    assert_eq!(s.number_of_evaluations(), 65);
    assert_eq!(s.absolute_error(), 0.0);
    Ok(())
}

#[test]
fn tiny_budget_fails() -> TestResult {
    let mut s = Simpson::new().set_max_evaluations(10)?;

    match s.integrate(&f64::sin, 0.0, PI) {
        Err(IntegrationError::MaxEvaluationsExceeded { algorithm, max_evaluations, last_estimate }) => {
            assert_eq!(algorithm, Algorithm::Simpson);
            assert_eq!(max_evaluations, 10);
            assert!((last_estimate - 2.0).abs() < 1e-2);
        }
        other => panic!("expected MaxEvaluationsExceeded, got {other:?}"),
    }
    Ok(())
}

#[test]
fn reversed_limits_negate() -> TestResult {
    let mut s = Simpson::new();

    let forward  = s.integrate(&f64::exp, 0.0, 1.0)?;
    let backward = s.integrate(&f64::exp, 1.0, 0.0)?;
    assert_eq!(backward, -forward);
    assert_abs_diff_eq!(forward, std::f64::consts::E - 1.0, epsilon = 1e-9);
    Ok(())
}

#[test]
fn non_finite_integrand_is_reported() {
    let mut s = Simpson::new();

    assert!(matches!(
        s.integrate(&|x: f64| 1.0 / x, 0.0, 1.0),
        Err(IntegrationError::NonFiniteEvaluation { .. })
    ));
}
