//! Error types for matrix and curve-fitting operations.
//!
//! ## Purpose
//!
//! This module defines [`CurveFitError`], the single error enum surfaced by
//! every fallible operation in the crate: matrix construction and arithmetic,
//! determinant/inverse computation, and the regression entry points.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: every condition is detected and raised at the point of
//!   violation, before partial computation proceeds. No operation returns a
//!   truncated or partially-filled matrix.
//! * **Distinct, catchable conditions**: a singular system is reported as
//!   [`CurveFitError::SingularMatrix`], never leaked as a raw
//!   division-by-zero fault; a log of a non-positive sample is
//!   [`CurveFitError::NonPositiveValue`], raised before any transform runs.
//! * **No recovery**: none of these conditions are retried or repaired
//!   internally (no automatic regularization of a singular system); they are
//!   surfaced for the caller to handle or report.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors that can occur during matrix operations or curve fitting.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveFitError {
    /// Matrix construction received no rows, or a row with no columns.
    EmptyMatrix,

    /// Matrix construction received rows of unequal length.
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of row 0, which sets the column count.
        expected: usize,
        /// Length actually found at `row`.
        got: usize,
    },

    /// A square-only operation (minor, cofactor, determinant, inverse) was
    /// invoked on a rectangular matrix.
    NotSquare {
        /// Row count of the operand.
        rows: usize,
        /// Column count of the operand.
        cols: usize,
    },

    /// Two operands of an elementwise or product operation have
    /// incompatible dimensions.
    ShapeMismatch {
        /// The operation that failed (`"add"`, `"sub"`, `"matmul"`, ...).
        op: &'static str,
        /// Dimensions of the left operand.
        left: (usize, usize),
        /// Dimensions of the right operand.
        right: (usize, usize),
    },

    /// The matrix (or the normal matrix `XᵀX` of a least-squares solve) has
    /// a determinant of exactly zero and cannot be inverted.
    SingularMatrix,

    /// Regression input sequences `x` and `y` differ in length.
    MismatchedInputs {
        /// Number of x samples supplied.
        x_len: usize,
        /// Number of y samples supplied.
        y_len: usize,
    },

    /// Too few sample points for the requested model.
    TooFewPoints {
        /// Number of points supplied.
        got: usize,
        /// Minimum required by the model.
        min: usize,
    },

    /// A logarithm was requested of a zero or negative sample value
    /// (power and exponential linearization).
    NonPositiveValue {
        /// Which input axis held the value (`"x"` or `"y"`).
        axis: &'static str,
        /// Index of the offending sample.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// A sample value was NaN or infinite.
    InvalidNumericValue(String),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the parameter that was set twice.
        parameter: &'static str,
    },
}

impl fmt::Display for CurveFitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMatrix => {
                write!(f, "Matrix must have at least one row and one column")
            }
            Self::RaggedRows { row, expected, got } => {
                write!(
                    f,
                    "Ragged rows: row {} has {} elements, expected {}",
                    row, got, expected
                )
            }
            Self::NotSquare { rows, cols } => {
                write!(f, "Matrix is not square: {}x{}", rows, cols)
            }
            Self::ShapeMismatch { op, left, right } => {
                write!(
                    f,
                    "Shape mismatch in {}: {}x{} vs {}x{}",
                    op, left.0, left.1, right.0, right.1
                )
            }
            Self::SingularMatrix => {
                write!(f, "Matrix is singular (determinant is zero)")
            }
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {} points, y has {}", x_len, y_len)
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {}, need at least {}", got, min)
            }
            Self::NonPositiveValue { axis, index, value } => {
                write!(
                    f,
                    "Invalid {} value at index {}: {} (must be > 0 to take logarithm)",
                    axis, index, value
                )
            }
            Self::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                    parameter
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CurveFitError {}
