//! Input validation for regression sample data.
//!
//! ## Purpose
//!
//! This module provides the validation functions the regression entry
//! points run before any computation: sequence lengths, minimum sample
//! counts, finite values, and logarithm domains.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: validation stops at the first error encountered and no
//!   partial computation happens after a failure.
//! * **Efficiency**: checks are ordered from cheap to expensive (lengths
//!   before per-element scans).
//! * **Generics**: validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free; inputs are read-only.
//!
//! ## Non-goals
//!
//! * This module does not transform, filter, or repair input data.
//! * This module does not perform the fitting itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CurveFitError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for regression sample data.
///
/// Static methods returning `Result<(), CurveFitError>`, failing fast on
/// the first violation.
pub struct Validator;

impl Validator {
    /// Validate paired sample arrays for a fit requiring `min` points.
    ///
    /// Checks, in order: matching lengths, minimum count, all values finite.
    pub fn validate_xy<T: Float>(x: &[T], y: &[T], min: usize) -> Result<(), CurveFitError> {
        if x.len() != y.len() {
            return Err(CurveFitError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        if x.len() < min {
            return Err(CurveFitError::TooFewPoints {
                got: x.len(),
                min,
            });
        }

        for (i, &val) in x.iter().enumerate() {
            if !val.is_finite() {
                return Err(CurveFitError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        for (i, &val) in y.iter().enumerate() {
            if !val.is_finite() {
                return Err(CurveFitError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate that every value on `axis` is strictly positive, so its
    /// logarithm exists. Raised before any transform runs.
    pub fn validate_positive<T: Float>(
        values: &[T],
        axis: &'static str,
    ) -> Result<(), CurveFitError> {
        for (i, &val) in values.iter().enumerate() {
            if val <= T::zero() {
                return Err(CurveFitError::NonPositiveValue {
                    axis,
                    index: i,
                    value: val.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }
}
