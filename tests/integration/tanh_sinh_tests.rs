use std::cell::Cell;
use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use boundary_kernel::integration::tanh_sinh::DEFAULT_MAX_LEVELS;
use boundary_kernel::integration::{IntegrationError, Integrator, TanhSinh};

type TestResult = Result<(), IntegrationError>;

#[test]
fn integrates_sin_over_half_period() -> TestResult {
    let mut ts = TanhSinh::new();

    let v = ts.integrate(&f64::sin, 0.0, PI)?;
    assert_abs_diff_eq!(v, 2.0, epsilon = 1e-10);
    // reported error is the requested accuracy
    assert_eq!(ts.absolute_error(), ts.absolute_accuracy());
    assert!(ts.number_of_evaluations() > 0);
    Ok(())
}

#[test]
fn handles_endpoint_singularities() -> TestResult {
    let mut ts = TanhSinh::new();

    assert_abs_diff_eq!(ts.integrate(&|x: f64| 1.0 / x.sqrt(), 0.0, 1.0)?, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(ts.integrate(&f64::ln, 0.0, 1.0)?, -1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(ts.integrate(&f64::sqrt, 0.0, 1.0)?, 2.0 / 3.0, epsilon = 1e-10);
    Ok(())
}

#[test]
fn counts_every_integrand_call() -> TestResult {
    let calls  = Cell::new(0usize);
    let f      = |x: f64| { calls.set(calls.get() + 1); (-x * x).exp() };
    let mut ts = TanhSinh::new().set_absolute_accuracy(1e-12)?;

    ts.integrate(&f, -3.0, 3.0)?;
    assert_eq!(ts.number_of_evaluations(), calls.get());
    Ok(())
}

#[test]
fn outputs_do_not_accumulate() -> TestResult {
    let mut ts = TanhSinh::new();

    ts.integrate(&f64::exp, 0.0, 1.0)?;
    let first = ts.number_of_evaluations();
    ts.integrate(&f64::exp, 0.0, 1.0)?;
    assert_eq!(ts.number_of_evaluations(), first);
    Ok(())
}

#[test]
fn outputs_follow_the_latest_accuracy_target() -> TestResult {
    let mut ts = TanhSinh::new().set_absolute_accuracy(1e-4)?;

    ts.integrate(&f64::exp, 0.0, 1.0)?;
    assert_eq!(ts.absolute_error(), 1e-4);

    ts = ts.set_absolute_accuracy(1e-12)?;
    let v = ts.integrate(&f64::exp, 0.0, 1.0)?;

    let mut fresh = TanhSinh::new().set_absolute_accuracy(1e-12)?;
    let expected  = fresh.integrate(&f64::exp, 0.0, 1.0)?;
    assert_eq!(v, expected);
    assert_eq!(ts.absolute_error(), 1e-12);
    assert_eq!(ts.number_of_evaluations(), fresh.number_of_evaluations());
    Ok(())
}

#[test]
fn level_cap_returns_best_estimate() -> TestResult {
    let mut ts = TanhSinh::new().set_max_levels(1)?;

    let v = ts.integrate(&f64::sin, 0.0, PI)?;
    assert!((v - 2.0).abs() < 1e-2);
    assert!((v - 2.0).abs() > 1e-10);
    Ok(())
}

#[test]
fn evaluation_budget_is_advisory() -> TestResult {
    let mut ts = TanhSinh::new().set_max_evaluations(5)?;

    let v = ts.integrate(&f64::sin, 0.0, PI)?;
    assert_abs_diff_eq!(v, 2.0, epsilon = 1e-10);
    assert!(ts.number_of_evaluations() > 5);
    Ok(())
}

#[test]
fn reversed_limits_negate() -> TestResult {
    let mut ts = TanhSinh::new();

    let backward = ts.integrate(&|x: f64| x * x, 2.0, -1.0)?;
    assert_abs_diff_eq!(backward, -3.0, epsilon = 1e-10);
    assert_eq!(ts.integrate(&|x: f64| x * x, 1.5, 1.5)?, 0.0);
    Ok(())
}

#[test]
fn defaults_and_setters() -> TestResult {
    let ts = TanhSinh::new();
    assert_eq!(ts.absolute_accuracy(), 1e-10);
    assert_eq!(ts.max_evaluations(), usize::MAX);
    assert_eq!(ts.max_levels(), DEFAULT_MAX_LEVELS);

    assert!(matches!(
        TanhSinh::new().set_absolute_accuracy(0.0),
        Err(IntegrationError::InvalidParameter { name: "absolute_accuracy", .. })
    ));
    assert!(matches!(
        TanhSinh::new().set_max_levels(0),
        Err(IntegrationError::InvalidParameter { name: "max_levels", .. })
    ));
    assert!(matches!(
        TanhSinh::new().set_max_evaluations(0),
        Err(IntegrationError::InvalidParameter { name: "max_evaluations", .. })
    ));
    Ok(())
}

#[test]
fn non_finite_integrand_is_reported() {
    let mut ts = TanhSinh::new();

    // the first abscissa is the midpoint
    assert!(matches!(
        ts.integrate(&|x: f64| 1.0 / x, -1.0, 1.0),
        Err(IntegrationError::NonFiniteEvaluation { .. })
    ));
}
