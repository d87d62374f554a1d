use std::cell::Cell;

use boundary_kernel::root_finding::{
    Brent, Differentiable, Newton, RootFindingError, Solver1D, ValueOnly,
};

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_2_from_a_guess() -> TestResult {
    let f = ValueOnly::new(|x: f64| x * x - 2.0);

    let root = Brent::new().solve_with_step(&f, 1e-12, 1.0, 0.1)?;
    assert!((root - 2.0_f64.sqrt()).abs() <= 1e-11);
    Ok(())
}

#[test]
fn expands_to_the_left() -> TestResult {
    let f = ValueOnly::new(|x: f64| x + 7.5);

    let root = Brent::new().solve_with_step(&f, 1e-12, 0.0, 0.5)?;
    assert!((root + 7.5).abs() <= 1e-11);
    Ok(())
}

#[test]
fn derivative_solver_searches_too() -> TestResult {
    let f = Differentiable::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);

    let root = Newton::new().solve_with_step(&f, 1e-12, 1.0, 0.1)?;
    assert!((root - 2.0_f64.sqrt()).abs() <= 1e-12);
    Ok(())
}

#[test]
fn guess_on_the_root_is_returned() -> TestResult {
    let f = ValueOnly::new(|x: f64| x - 3.0);

    assert_eq!(Brent::new().solve_with_step(&f, 1e-12, 3.0, 1.0)?, 3.0);
    Ok(())
}

#[test]
fn no_sign_change_is_non_convergence() -> TestResult {
    let f = ValueOnly::new(|x: f64| x * x + 1.0);

    let err = Brent::new()
        .set_max_evaluations(20)?
        .solve_with_step(&f, 1e-12, 1.0, 0.1)
        .unwrap_err();
    assert!(matches!(err, RootFindingError::NonConvergence { max_evaluations: 20, .. }));
    Ok(())
}

#[test]
fn expansion_respects_domain_bounds() -> TestResult {
    let highest = Cell::new(f64::NEG_INFINITY);
    let f = ValueOnly::new(|x: f64| {
        highest.set(highest.get().max(x));
        x - 5.0
    });

    let res = Brent::new()
        .set_upper_bound(3.0)?
        .set_max_evaluations(30)?
        .solve_with_step(&f, 1e-12, 1.0, 0.1);

    assert!(matches!(res, Err(RootFindingError::NonConvergence { .. })));
    assert!(highest.get() <= 3.0);
    Ok(())
}

#[test]
fn rejects_non_positive_step() {
    let f = ValueOnly::new(|x: f64| x - 3.0);

    assert!(matches!(
        Brent::new().solve_with_step(&f, 1e-12, 0.0, 0.0),
        Err(RootFindingError::InvalidParameter { name: "step", .. })
    ));
}
