//! Fit-quality diagnostics.
//!
//! ## Purpose
//!
//! This module computes the usual goodness-of-fit summary from observed and
//! predicted value pairs: RMSE, MAE, R², and the residual standard
//! deviation.
//!
//! ## Design notes
//!
//! * **Formulae**: `RMSE = sqrt(Σrᵢ²/n)`, `MAE = Σ|rᵢ|/n`,
//!   `R² = 1 - SS_res/SS_tot`, `residual SD = sqrt(SS_res/(n-1))`,
//!   with `rᵢ = yᵢ - ŷᵢ`.
//! * **Constant targets**: when `SS_tot` is zero (all observed values
//!   equal), R² is defined as 1 for a perfect fit and 0 otherwise.
//!
//! ## Non-goals
//!
//! * No information criteria (AIC/BIC) and no interval estimation.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CurveFitError;

// ============================================================================
// Diagnostics
// ============================================================================

/// Goodness-of-fit summary for a fitted model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitDiagnostics<T> {
    /// Root mean squared error.
    pub rmse: T,
    /// Mean absolute error.
    pub mae: T,
    /// Coefficient of determination.
    pub r_squared: T,
    /// Sample standard deviation of the residuals.
    pub residual_sd: T,
}

impl<T: Float> FitDiagnostics<T> {
    /// Compute diagnostics from observed and predicted value pairs.
    ///
    /// # Errors
    ///
    /// * [`CurveFitError::MismatchedInputs`] if the sequences differ in
    ///   length.
    /// * [`CurveFitError::TooFewPoints`] if the sequences are empty.
    pub fn compute(observed: &[T], predicted: &[T]) -> Result<Self, CurveFitError> {
        if observed.len() != predicted.len() {
            return Err(CurveFitError::MismatchedInputs {
                x_len: observed.len(),
                y_len: predicted.len(),
            });
        }
        if observed.is_empty() {
            return Err(CurveFitError::TooFewPoints { got: 0, min: 1 });
        }

        let n = T::from(observed.len()).unwrap();
        let mean_y = observed.iter().fold(T::zero(), |acc, &v| acc + v) / n;

        let mut ss_res = T::zero();
        let mut ss_tot = T::zero();
        let mut abs_sum = T::zero();
        for (&yi, &fi) in observed.iter().zip(predicted.iter()) {
            let r = yi - fi;
            ss_res = ss_res + r * r;
            abs_sum = abs_sum + r.abs();
            let d = yi - mean_y;
            ss_tot = ss_tot + d * d;
        }

        let r_squared = if ss_tot > T::zero() {
            T::one() - ss_res / ss_tot
        } else if ss_res == T::zero() {
            T::one()
        } else {
            T::zero()
        };

        let residual_sd = if observed.len() > 1 {
            (ss_res / (n - T::one())).sqrt()
        } else {
            T::zero()
        };

        Ok(Self {
            rmse: (ss_res / n).sqrt(),
            mae: abs_sum / n,
            r_squared,
            residual_sd,
        })
    }
}
