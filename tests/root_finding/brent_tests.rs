//! tests for the brent root finding algorithm
use boundary_kernel::root_finding::{Brent, RootFindingError, Solver1D, Termination, ValueOnly};

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = ValueOnly::new(|x: f64| x * x - 2.0);
    let acc = 1e-12;

    let rep = Brent::new().solve_with_report(&f, acc, 1.5, 1.0, 2.0)?;

    assert_eq!(rep.termination, Termination::Converged);
    assert_eq!(rep.algorithm_name, "brent");
    assert!((rep.root - 2.0_f64.sqrt()).abs() <= acc);
    Ok(())
}

#[test]
fn finds_3() -> TestResult {
    let f = ValueOnly::new(|x: f64| 2.0 * x - 6.0);

    let root = Brent::new().solve(&f, 1e-12, 5.0, 0.0, 10.0)?;
    assert!((root - 3.0).abs() <= 1e-12);
    Ok(())
}

#[test]
fn finds_negative_5() -> TestResult {
    let f = ValueOnly::new(|x: f64| x + 5.0);

    let root = Brent::new().solve(&f, 1e-12, -2.0, -10.0, 0.0)?;
    assert!((root + 5.0).abs() <= 1e-12);
    Ok(())
}

#[test]
fn finds_dottie_number() -> TestResult {
    let f = ValueOnly::new(|x: f64| x.cos() - x);

    let root = Brent::new().solve(&f, 1e-12, 0.5, 0.0, 1.0)?;
    assert!((root - 0.739_085_133_215_160_6).abs() <= 1e-12);
    Ok(())
}

#[test]
fn exhausted_budget_is_non_convergence() -> TestResult {
    let f = ValueOnly::new(|x: f64| x.cos() - x);

    let err = Brent::new()
        .set_max_evaluations(4)?
        .solve(&f, 1e-14, 0.5, 0.0, 1.0)
        .unwrap_err();

    assert!(matches!(
        err,
        RootFindingError::NonConvergence { max_evaluations: 4, .. }
    ));
    Ok(())
}

#[test]
fn step_function_stays_in_bracket() -> TestResult {
    // discontinuous sign change: converges onto the jump
    let f = ValueOnly::new(|x: f64| if x < 0.3 { -1.0 } else { 1.0 });

    let root = Brent::new().solve(&f, 1e-10, 0.9, 0.0, 1.0)?;
    assert!((root - 0.3).abs() <= 1e-9);
    Ok(())
}

#[test]
fn sign_change_across_a_pole_is_accepted() -> TestResult {
    let pole = |x: f64| 1.0 / (x - 0.3);
    let f    = ValueOnly::new(pole);

    let rep = Brent::new().solve_with_report(&f, 1e-12, 0.5, -1.0, 2.0)?;

    assert_eq!(rep.termination, Termination::Converged);
    assert!((rep.root - 0.3).abs() < 1e-9);
    // the residual is not small; callers must check it themselves
    assert!(pole(rep.root).abs() > 1e9);
    Ok(())
}
