//! Normal-equations least-squares solver.
//!
//! ## Purpose
//!
//! This module solves the least-squares problem for a design matrix: given
//! `X` (n samples x k parameters) and targets `y`, find the `k` coefficients
//! minimizing the squared residuals via the normal equations
//! `(XᵀX) c = Xᵀ y`, solved as `c = (XᵀX)⁻¹ Xᵀ y`.
//!
//! ## Design notes
//!
//! * The solve is composed entirely from the kernel's own transpose,
//!   product, and inverse — no separate elimination path to drift from.
//! * `XᵀX` is k x k for k model parameters (k <= 3 for the fits in this
//!   crate), so the cofactor-expansion inverse stays cheap.
//! * A singular normal matrix (collinear design columns, e.g. all-equal x
//!   samples) surfaces as [`CurveFitError::SingularMatrix`], subject to the
//!   kernel's exact-zero determinant check.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CurveFitError;

use super::dense::Matrix;

// ============================================================================
// Least-Squares Solve
// ============================================================================

impl<T: Float> Matrix<T> {
    /// Solve `min ‖self · c - y‖²` for the coefficient vector `c`, treating
    /// `self` as the design matrix.
    ///
    /// Returns the `k` coefficients flat, in design-column order.
    ///
    /// # Errors
    ///
    /// * [`CurveFitError::MismatchedInputs`] if `y.len()` differs from the
    ///   number of design rows.
    /// * [`CurveFitError::SingularMatrix`] if `XᵀX` has zero determinant.
    ///
    /// # Examples
    ///
    /// ```
    /// use curvefit_rs::Matrix;
    ///
    /// // Design rows [1, x] for y = 2 + 3x on x = [0, 1, 2].
    /// let x = Matrix::from_rows(vec![
    ///     vec![1.0f64, 0.0],
    ///     vec![1.0, 1.0],
    ///     vec![1.0, 2.0],
    /// ])?;
    /// let beta = x.solve_least_squares(&[2.0, 5.0, 8.0])?;
    /// assert!((beta[0] - 2.0).abs() < 1e-10);
    /// assert!((beta[1] - 3.0).abs() < 1e-10);
    /// # Result::<(), curvefit_rs::CurveFitError>::Ok(())
    /// ```
    pub fn solve_least_squares(&self, y: &[T]) -> Result<Vec<T>, CurveFitError> {
        if y.len() != self.n_rows() {
            return Err(CurveFitError::MismatchedInputs {
                x_len: self.n_rows(),
                y_len: y.len(),
            });
        }

        let rhs = Self::from_vec(y.len(), 1, y.to_vec())?;
        let xt = self.transpose();
        let normal = xt.matmul(self)?;
        let moment = xt.matmul(&rhs)?;
        let coeffs = normal.inverse()?.matmul(&moment)?;

        Ok(coeffs.as_slice().to_vec())
    }
}
