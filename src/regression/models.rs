//! Least-squares curve-fit models.
//!
//! ## Purpose
//!
//! This module defines the four named fits and their result types. Each fit
//! builds a design matrix from the samples, solves the normal equations
//! through the kernel, and returns a model struct that both exposes the raw
//! coefficients and evaluates the fitted curve.
//!
//! ## Design notes
//!
//! * **Design rows**: linear `[1, x]`, quadratic `[1, x, x²]`. Power and
//!   exponential models are linearized by logarithms, fit as lines, and
//!   mapped back by exponentiating the intercept (and, for exponential,
//!   the slope).
//! * **Domains**: the power fit logs both axes and requires every `x` and
//!   `y` to be strictly positive; the exponential fit logs `y` only. Both
//!   guards run before any transform.
//! * **Minimum points**: 2 for the two-parameter models. The quadratic fit
//!   requires 3 up front — with two samples its 3x3 normal matrix is
//!   structurally singular, and the early length check reads better than a
//!   late singularity error.
//!
//! ## Key concepts
//!
//! * **Model structs**: coefficients are public fields, also available flat
//!   through `coefficients()`; `predict` evaluates the curve and
//!   `predictor()` returns a standalone closure over the coefficients.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::matrix::Matrix;
use crate::primitives::errors::CurveFitError;
use crate::regression::validator::Validator;

// ============================================================================
// Model Types
// ============================================================================

/// A fitted straight line `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearFit<T> {
    /// Constant term `b`.
    pub intercept: T,
    /// Slope `m`.
    pub slope: T,
}

impl<T: Float> LinearFit<T> {
    /// Coefficients flat, ordered `(intercept, slope)`.
    pub fn coefficients(&self) -> [T; 2] {
        [self.intercept, self.slope]
    }

    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }

    /// A standalone predictor closed over the coefficients.
    pub fn predictor(self) -> impl Fn(T) -> T {
        move |x| self.predict(x)
    }
}

/// A fitted parabola `y = quadratic·x² + linear·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadraticFit<T> {
    /// Constant term `c`.
    pub intercept: T,
    /// First-order coefficient `b`.
    pub linear: T,
    /// Second-order coefficient `a`.
    pub quadratic: T,
}

impl<T: Float> QuadraticFit<T> {
    /// Coefficients flat, ordered `(intercept, linear, quadratic)` —
    /// ascending powers of x.
    pub fn coefficients(&self) -> [T; 3] {
        [self.intercept, self.linear, self.quadratic]
    }

    /// Evaluate the fitted parabola at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.linear * x + self.quadratic * x * x
    }

    /// A standalone predictor closed over the coefficients.
    pub fn predictor(self) -> impl Fn(T) -> T {
        move |x| self.predict(x)
    }
}

/// A fitted power law `y = coefficient·x^exponent`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerFit<T> {
    /// Leading coefficient `a`.
    pub coefficient: T,
    /// Exponent `n`.
    pub exponent: T,
}

impl<T: Float> PowerFit<T> {
    /// Coefficients flat, ordered `(coefficient, exponent)`.
    pub fn coefficients(&self) -> [T; 2] {
        [self.coefficient, self.exponent]
    }

    /// Evaluate the fitted power law at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.coefficient * x.powf(self.exponent)
    }

    /// A standalone predictor closed over the coefficients.
    pub fn predictor(self) -> impl Fn(T) -> T {
        move |x| self.predict(x)
    }
}

/// A fitted exponential `y = coefficient·base^x`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExponentialFit<T> {
    /// Leading coefficient `a`.
    pub coefficient: T,
    /// Base `b`.
    pub base: T,
}

impl<T: Float> ExponentialFit<T> {
    /// Coefficients flat, ordered `(coefficient, base)`.
    pub fn coefficients(&self) -> [T; 2] {
        [self.coefficient, self.base]
    }

    /// Evaluate the fitted exponential at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.coefficient * self.base.powf(x)
    }

    /// A standalone predictor closed over the coefficients.
    pub fn predictor(self) -> impl Fn(T) -> T {
        move |x| self.predict(x)
    }
}

// ============================================================================
// Fit Entry Points
// ============================================================================

/// Fit `y = m·x + b` by least squares over design rows `[1, xᵢ]`.
///
/// # Errors
///
/// * [`CurveFitError::MismatchedInputs`] if `x` and `y` differ in length.
/// * [`CurveFitError::TooFewPoints`] if fewer than 2 samples are supplied.
/// * [`CurveFitError::InvalidNumericValue`] if any sample is NaN/infinite.
/// * [`CurveFitError::SingularMatrix`] if the design is degenerate (all x
///   identical).
///
/// # Examples
///
/// ```
/// use curvefit_rs::fit_linear;
///
/// let fit = fit_linear(&[1.0f64, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0])?;
/// assert!((fit.predict(5.0) - 10.0).abs() < 1e-10);
/// # Result::<(), curvefit_rs::CurveFitError>::Ok(())
/// ```
pub fn fit_linear<T: Float>(x: &[T], y: &[T]) -> Result<LinearFit<T>, CurveFitError> {
    Validator::validate_xy(x, y, 2)?;

    let design = design_matrix(x, &[|_: T| T::one(), |v: T| v])?;
    let beta = design.solve_least_squares(y)?;
    Ok(LinearFit {
        intercept: beta[0],
        slope: beta[1],
    })
}

/// Fit `y = a·x² + b·x + c` by least squares over design rows `[1, xᵢ, xᵢ²]`.
///
/// # Errors
///
/// * [`CurveFitError::MismatchedInputs`] if `x` and `y` differ in length.
/// * [`CurveFitError::TooFewPoints`] if fewer than 3 samples are supplied
///   (two points cannot determine a parabola's normal equations).
/// * [`CurveFitError::InvalidNumericValue`] if any sample is NaN/infinite.
/// * [`CurveFitError::SingularMatrix`] if the design is degenerate.
pub fn fit_quadratic<T: Float>(x: &[T], y: &[T]) -> Result<QuadraticFit<T>, CurveFitError> {
    Validator::validate_xy(x, y, 3)?;

    let design = design_matrix(x, &[|_: T| T::one(), |v: T| v, |v: T| v * v])?;
    let beta = design.solve_least_squares(y)?;
    Ok(QuadraticFit {
        intercept: beta[0],
        linear: beta[1],
        quadratic: beta[2],
    })
}

/// Fit `y = a·xⁿ` by log-log linearization.
///
/// Takes `ln x` and `ln y`, fits a line, then maps back:
/// `a = exp(intercept)`, `n = slope`.
///
/// # Errors
///
/// * [`CurveFitError::NonPositiveValue`] if any `x` or `y` is <= 0 — the
///   logarithm is undefined, and the guard runs before any transform.
/// * Plus every condition [`fit_linear`] can raise.
pub fn fit_power<T: Float>(x: &[T], y: &[T]) -> Result<PowerFit<T>, CurveFitError> {
    Validator::validate_xy(x, y, 2)?;
    Validator::validate_positive(x, "x")?;
    Validator::validate_positive(y, "y")?;

    let log_x: Vec<T> = x.iter().map(|&v| v.ln()).collect();
    let log_y: Vec<T> = y.iter().map(|&v| v.ln()).collect();
    let line = fit_linear(&log_x, &log_y)?;

    Ok(PowerFit {
        coefficient: line.intercept.exp(),
        exponent: line.slope,
    })
}

/// Fit `y = a·bˣ` by semi-log linearization.
///
/// Takes `ln y` against raw `x`, fits a line, then maps back:
/// `a = exp(intercept)`, `b = exp(slope)`.
///
/// # Errors
///
/// * [`CurveFitError::NonPositiveValue`] if any `y` is <= 0.
/// * Plus every condition [`fit_linear`] can raise.
pub fn fit_exponential<T: Float>(x: &[T], y: &[T]) -> Result<ExponentialFit<T>, CurveFitError> {
    Validator::validate_xy(x, y, 2)?;
    Validator::validate_positive(y, "y")?;

    let log_y: Vec<T> = y.iter().map(|&v| v.ln()).collect();
    let line = fit_linear(x, &log_y)?;

    Ok(ExponentialFit {
        coefficient: line.intercept.exp(),
        base: line.slope.exp(),
    })
}

// ============================================================================
// Design Matrix Construction
// ============================================================================

// One design row per sample, one column per basis function.
fn design_matrix<T: Float>(
    x: &[T],
    basis: &[fn(T) -> T],
) -> Result<Matrix<T>, CurveFitError> {
    let mut data = Vec::with_capacity(x.len() * basis.len());
    for &xi in x {
        for f in basis {
            data.push(f(xi));
        }
    }
    Matrix::from_vec(x.len(), basis.len(), data)
}
