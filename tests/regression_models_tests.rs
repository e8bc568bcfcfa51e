//! Tests for the four curve-fit models.
//!
//! ## Test Organization
//!
//! 1. **Linear** - exact and noisy lines, predictors
//! 2. **Quadratic** - exact parabolas, minimum point count
//! 3. **Power** - log-log linearization and domain guards
//! 4. **Exponential** - semi-log linearization and domain guards
//! 5. **Shared Validation** - length, count, and finiteness checks

use approx::assert_relative_eq;
use curvefit_rs::{
    fit_exponential, fit_linear, fit_power, fit_quadratic, CurveFitError,
};

// ============================================================================
// Linear
// ============================================================================

#[test]
fn test_linear_exact_line() {
    let fit = fit_linear(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]).unwrap();

    assert_relative_eq!(fit.intercept, 0.0, epsilon = 1e-10);
    assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-10);
    assert_relative_eq!(fit.predict(5.0), 10.0, epsilon = 1e-10);

    let [b, m] = fit.coefficients();
    assert_relative_eq!(b, 0.0, epsilon = 1e-10);
    assert_relative_eq!(m, 2.0, epsilon = 1e-10);
}

#[test]
fn test_linear_with_offset() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 3.5, 6.0, 8.5];
    let fit = fit_linear(&x, &y).unwrap();
    assert_relative_eq!(fit.intercept, 1.0, epsilon = 1e-10);
    assert_relative_eq!(fit.slope, 2.5, epsilon = 1e-10);
}

#[test]
fn test_linear_noisy_minimizes() {
    // Same hand-computed case as the solver tests, through the model layer.
    let fit = fit_linear(&[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 3.0, 5.0]).unwrap();
    assert_relative_eq!(fit.intercept, -0.5, epsilon = 1e-10);
    assert_relative_eq!(fit.slope, 1.3, epsilon = 1e-10);
}

#[test]
fn test_linear_predictor_closure() {
    let fit = fit_linear(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0]).unwrap();
    let f = fit.predictor();
    assert_relative_eq!(f(10.0), 21.0, epsilon = 1e-10);
    assert_relative_eq!(f(0.0), 1.0, epsilon = 1e-10);
}

#[test]
fn test_linear_degenerate_x_is_singular() {
    let err = fit_linear(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, CurveFitError::SingularMatrix);
}

// ============================================================================
// Quadratic
// ============================================================================

#[test]
fn test_quadratic_exact_parabola() {
    // y = 2x^2 - 3x + 1
    let x = [-2.0, -1.0, 0.0, 1.0, 2.0, 3.0];
    let y: Vec<f64> = x.iter().map(|&v| 2.0 * v * v - 3.0 * v + 1.0).collect();

    let fit = fit_quadratic(&x, &y).unwrap();
    assert_relative_eq!(fit.intercept, 1.0, epsilon = 1e-8);
    assert_relative_eq!(fit.linear, -3.0, epsilon = 1e-8);
    assert_relative_eq!(fit.quadratic, 2.0, epsilon = 1e-8);

    assert_relative_eq!(fit.predict(10.0), 171.0, epsilon = 1e-6);

    let [c, b, a] = fit.coefficients();
    assert_relative_eq!(c, 1.0, epsilon = 1e-8);
    assert_relative_eq!(b, -3.0, epsilon = 1e-8);
    assert_relative_eq!(a, 2.0, epsilon = 1e-8);
}

#[test]
fn test_quadratic_reduces_to_line_on_linear_data() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y: Vec<f64> = x.iter().map(|&v| 2.0 * v + 1.0).collect();

    let fit = fit_quadratic(&x, &y).unwrap();
    assert_relative_eq!(fit.quadratic, 0.0, epsilon = 1e-8);
    assert_relative_eq!(fit.linear, 2.0, epsilon = 1e-8);
    assert_relative_eq!(fit.intercept, 1.0, epsilon = 1e-8);
}

#[test]
fn test_quadratic_requires_three_points() {
    let err = fit_quadratic(&[1.0, 2.0], &[1.0, 4.0]).unwrap_err();
    assert_eq!(err, CurveFitError::TooFewPoints { got: 2, min: 3 });
}

// ============================================================================
// Power
// ============================================================================

#[test]
fn test_power_exact() {
    // y = 3 * x^2
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y: Vec<f64> = x.iter().map(|&v: &f64| 3.0 * v.powi(2)).collect();

    let fit = fit_power(&x, &y).unwrap();
    assert_relative_eq!(fit.coefficient, 3.0, epsilon = 1e-8);
    assert_relative_eq!(fit.exponent, 2.0, epsilon = 1e-8);
    assert_relative_eq!(fit.predict(6.0), 108.0, epsilon = 1e-6);
}

#[test]
fn test_power_fractional_exponent() {
    // y = 2 * sqrt(x)
    let x = [1.0, 4.0, 9.0, 16.0];
    let y: Vec<f64> = x.iter().map(|&v: &f64| 2.0 * v.sqrt()).collect();

    let fit = fit_power(&x, &y).unwrap();
    assert_relative_eq!(fit.coefficient, 2.0, epsilon = 1e-8);
    assert_relative_eq!(fit.exponent, 0.5, epsilon = 1e-8);
}

#[test]
fn test_power_rejects_nonpositive_x() {
    let err = fit_power(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(
        err,
        CurveFitError::NonPositiveValue {
            axis: "x",
            index: 0,
            value: 0.0,
        }
    );
}

#[test]
fn test_power_rejects_negative_y() {
    let err = fit_power(&[1.0, 2.0, 3.0], &[1.0, -2.0, 3.0]).unwrap_err();
    assert_eq!(
        err,
        CurveFitError::NonPositiveValue {
            axis: "y",
            index: 1,
            value: -2.0,
        }
    );
}

// ============================================================================
// Exponential
// ============================================================================

#[test]
fn test_exponential_exact() {
    // y = 2 * 1.5^x
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y: Vec<f64> = x.iter().map(|&v: &f64| 2.0 * 1.5f64.powf(v)).collect();

    let fit = fit_exponential(&x, &y).unwrap();
    assert_relative_eq!(fit.coefficient, 2.0, epsilon = 1e-8);
    assert_relative_eq!(fit.base, 1.5, epsilon = 1e-8);
    assert_relative_eq!(fit.predict(5.0), 2.0 * 1.5f64.powi(5), epsilon = 1e-6);
}

#[test]
fn test_exponential_decay() {
    // y = 10 * 0.5^x; negative x is fine, only y must be positive.
    let x = [-1.0, 0.0, 1.0, 2.0, 3.0];
    let y: Vec<f64> = x.iter().map(|&v: &f64| 10.0 * 0.5f64.powf(v)).collect();

    let fit = fit_exponential(&x, &y).unwrap();
    assert_relative_eq!(fit.coefficient, 10.0, epsilon = 1e-8);
    assert_relative_eq!(fit.base, 0.5, epsilon = 1e-8);
}

#[test]
fn test_exponential_rejects_nonpositive_y() {
    let err = fit_exponential(&[1.0, 2.0, 3.0], &[1.0, 0.0, 3.0]).unwrap_err();
    assert_eq!(
        err,
        CurveFitError::NonPositiveValue {
            axis: "y",
            index: 1,
            value: 0.0,
        }
    );
}

#[test]
fn test_exponential_predictor_closure() {
    let x = [0.0, 1.0, 2.0];
    let y = [1.0, 2.0, 4.0];
    let f = fit_exponential(&x, &y).unwrap().predictor();
    assert_relative_eq!(f(3.0), 8.0, epsilon = 1e-8);
}

// ============================================================================
// Shared Validation
// ============================================================================

#[test]
fn test_mismatched_lengths_fail_before_computation() {
    let err = fit_linear(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
    assert_eq!(err, CurveFitError::MismatchedInputs { x_len: 3, y_len: 2 });

    let err = fit_power(&[1.0], &[1.0, 2.0]).unwrap_err();
    assert_eq!(err, CurveFitError::MismatchedInputs { x_len: 1, y_len: 2 });
}

#[test]
fn test_too_few_points() {
    let err = fit_linear(&[1.0], &[2.0]).unwrap_err();
    assert_eq!(err, CurveFitError::TooFewPoints { got: 1, min: 2 });

    let err = fit_exponential::<f64>(&[], &[]).unwrap_err();
    assert_eq!(err, CurveFitError::TooFewPoints { got: 0, min: 2 });
}

#[test]
fn test_non_finite_samples_are_rejected() {
    let err = fit_linear(&[1.0, f64::NAN, 3.0], &[1.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(err, CurveFitError::InvalidNumericValue(_)));

    let err = fit_linear(&[1.0, 2.0, 3.0], &[1.0, f64::INFINITY, 3.0]).unwrap_err();
    assert!(matches!(err, CurveFitError::InvalidNumericValue(_)));
}

#[test]
fn test_f32_fits() {
    let fit = fit_linear(&[1.0f32, 2.0, 3.0], &[2.0f32, 4.0, 6.0]).unwrap();
    assert_relative_eq!(fit.slope, 2.0f32, epsilon = 1e-5);
}
