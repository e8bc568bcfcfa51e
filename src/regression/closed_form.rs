//! Closed-form single-predictor linear fit.
//!
//! ## Purpose
//!
//! This module provides the fast path for the one case frequent enough to
//! deserve it: a straight-line fit with a single predictor, computed from
//! mean-centered sums instead of a matrix solve.
//!
//! ## Design notes
//!
//! * **Formula**: `slope = Σ(xᵢ-x̄)(yᵢ-ȳ) / Σ(xᵢ-x̄)²`,
//!   `intercept = ȳ - slope·x̄` — the covariance/variance ratio.
//! * **Consistency**: this path is deliberately kept alongside the general
//!   matrix solve in [`fit_linear`](crate::fit_linear); the two must agree
//!   to floating-point tolerance and the test suite asserts it.
//! * **Degeneracy**: zero x-spread (all samples at one abscissa) is the
//!   same condition that makes the normal matrix singular, and reports the
//!   same [`CurveFitError::SingularMatrix`].

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CurveFitError;
use crate::regression::models::LinearFit;
use crate::regression::validator::Validator;

// ============================================================================
// Direct Fit
// ============================================================================

/// Fit `y = slope·x + intercept` by mean-centered sums, bypassing the
/// matrix solve.
///
/// Numerically equivalent to [`fit_linear`](crate::fit_linear) for the
/// single-predictor case; prefer this in hot paths that fit many small
/// lines.
///
/// # Errors
///
/// * [`CurveFitError::MismatchedInputs`] if `x` and `y` differ in length.
/// * [`CurveFitError::TooFewPoints`] if fewer than 2 samples are supplied.
/// * [`CurveFitError::InvalidNumericValue`] if any sample is NaN/infinite.
/// * [`CurveFitError::SingularMatrix`] if all x values are identical.
pub fn fit_line_direct<T: Float>(x: &[T], y: &[T]) -> Result<LinearFit<T>, CurveFitError> {
    Validator::validate_xy(x, y, 2)?;

    let n = T::from(x.len()).unwrap();
    let mean_x = x.iter().fold(T::zero(), |acc, &v| acc + v) / n;
    let mean_y = y.iter().fold(T::zero(), |acc, &v| acc + v) / n;

    let mut s_xx = T::zero();
    let mut s_xy = T::zero();
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        s_xx = s_xx + dx * dx;
        s_xy = s_xy + dx * (yi - mean_y);
    }

    if s_xx == T::zero() {
        return Err(CurveFitError::SingularMatrix);
    }

    let slope = s_xy / s_xx;
    Ok(LinearFit {
        intercept: mean_y - slope * mean_x,
        slope,
    })
}
