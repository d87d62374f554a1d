use boundary_kernel::root_finding::{Ridder, RootFindingError, Solver1D, Termination, ValueOnly};

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = ValueOnly::new(|x: f64| x * x - 2.0);
    let acc = 1e-12;

    let rep = Ridder::new().solve_with_report(&f, acc, 1.5, 1.0, 2.0)?;

    assert_eq!(rep.termination, Termination::Converged);
    assert_eq!(rep.algorithm_name, "ridder");
    assert!((rep.root - 2.0_f64.sqrt()).abs() <= 1e-11);
    Ok(())
}

#[test]
fn finds_cubic_root() -> TestResult {
    let f = ValueOnly::new(|x: f64| x * x * x - 2.0 * x - 5.0);

    let root = Ridder::new().solve(&f, 1e-12, 2.5, 2.0, 3.0)?;
    assert!((root - 2.094_551_481_542_326_5).abs() <= 1e-11);
    Ok(())
}

#[test]
fn finds_dottie_number() -> TestResult {
    let f = ValueOnly::new(|x: f64| x.cos() - x);

    let root = Ridder::new().solve(&f, 1e-12, 0.5, 0.0, 1.0)?;
    assert!((root - 0.739_085_133_215_160_6).abs() <= 1e-11);
    Ok(())
}

#[test]
fn needs_two_units_per_pass() -> TestResult {
    let f = ValueOnly::new(|x: f64| x.cos() - x);

    // endpoints use 2 of 3 units; no full pass fits
    let err = Ridder::new()
        .set_max_evaluations(3)?
        .solve(&f, 1e-12, 0.5, 0.0, 1.0)
        .unwrap_err();
    assert!(matches!(err, RootFindingError::NonConvergence { .. }));
    Ok(())
}
