use approx::assert_abs_diff_eq;
use boundary_kernel::interpolation::{Chebyshev, ChebyshevKind, Interpolation, InterpolationError};

type TestResult = Result<(), InterpolationError>;

const KINDS: [ChebyshevKind; 2] = [ChebyshevKind::FirstKind, ChebyshevKind::SecondKind];

fn quartic(x: f64) -> f64 { 3.0 * x.powi(4) - 2.0 * x.powi(3) + x - 0.5 }

#[test]
fn reproduces_polynomials_below_node_count() -> TestResult {
    for kind in KINDS {
        let p = Chebyshev::from_fn(5, quartic, kind)?;
        for x in [-1.0, -0.7, -0.1, 0.0, 0.33, 0.9, 1.0] {
            assert_abs_diff_eq!(p.value(x)?, quartic(x), epsilon = 1e-13);
        }
    }
    Ok(())
}

#[test]
fn converges_on_smooth_functions() -> TestResult {
    for kind in KINDS {
        let p = Chebyshev::from_fn(16, f64::exp, kind)?;
        for x in [-1.0, -0.5, 0.2, 0.75, 1.0] {
            assert_abs_diff_eq!(p.value(x)?, x.exp(), epsilon = 1e-13);
        }
    }
    Ok(())
}

#[test]
fn passes_through_its_samples() -> TestResult {
    let y = [0.3, -1.2, 4.0, 2.5];
    for kind in KINDS {
        let p = Chebyshev::new(&y, kind)?;
        for (x, yi) in p.nodes().into_iter().zip(y) {
            assert_abs_diff_eq!(p.value(x)?, yi, epsilon = 1e-13);
        }
    }
    Ok(())
}

#[test]
fn second_kind_is_default_and_hits_endpoints() -> TestResult {
    assert_eq!(ChebyshevKind::default(), ChebyshevKind::SecondKind);

    let p     = Chebyshev::from_fn(6, f64::cos, ChebyshevKind::default())?;
    let nodes = p.nodes();
    assert_eq!(nodes.len(), 6);
    assert_eq!(nodes[0], -1.0);
    assert_abs_diff_eq!(nodes[5], 1.0, epsilon = 1e-15);
    Ok(())
}

#[test]
fn update_y_replaces_samples() -> TestResult {
    let mut p = Chebyshev::from_fn(4, |x| x, ChebyshevKind::SecondKind)?;
    let old   = p.values();

    let err = p.update_y(&[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::LengthMismatch { expected: 4, got: 2 }));
    assert_eq!(p.values(), old);
    assert_abs_diff_eq!(p.value(0.5)?, 0.5, epsilon = 1e-14);

    let new_y: Vec<f64> = p.nodes().iter().map(|x| x * x).collect();
    p.update_y(&new_y)?;
    assert_eq!(p.values(), new_y);
    assert_abs_diff_eq!(p.value(0.5)?, 0.25, epsilon = 1e-14);
    Ok(())
}

#[test]
fn domain_is_clamped_within_tolerance() -> TestResult {
    let p = Chebyshev::from_fn(5, quartic, ChebyshevKind::SecondKind)?;

    assert_abs_diff_eq!(p.value(1.0 + 1e-13)?, quartic(1.0), epsilon = 1e-12);
    assert!(matches!(p.value(1.1), Err(InterpolationError::OutOfBounds { .. })));
    assert!(matches!(p.value(f64::NAN), Err(InterpolationError::OutOfBounds { .. })));
    Ok(())
}

#[test]
fn construction_errors() {
    assert!(matches!(
        Chebyshev::new(&[1.0], ChebyshevKind::FirstKind),
        Err(InterpolationError::InsufficientPoints { got: 1, need: 2 })
    ));
    assert!(matches!(
        Chebyshev::new(&[1.0, f64::NAN, 2.0], ChebyshevKind::FirstKind),
        Err(InterpolationError::NonFiniteVec { idx: 1 })
    ));
}
