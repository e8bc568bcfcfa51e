//! Cofactor expansion: minors, determinant, inverse.
//!
//! ## Purpose
//!
//! This module implements the square-matrix operations of the kernel —
//! minor extraction, signed cofactors, the determinant by recursive
//! cofactor expansion, and the adjugate-over-determinant inverse.
//!
//! ## Design notes
//!
//! * **Complexity**: cofactor expansion is exponential, O(n!) in the matrix
//!   order. This is the simplest correct method and is acceptable because
//!   the regression layer only ever produces normal-equation matrices of
//!   order <= 3; it is a documented limitation, not an oversight. Callers
//!   handing larger matrices to the kernel must bound the order themselves.
//! * **Singularity**: detected by an exact `determinant() == 0` comparison
//!   and reported as [`CurveFitError::SingularMatrix`] rather than leaking a
//!   division-by-zero. No tolerance is applied: a near-singular matrix with
//!   a tiny nonzero determinant passes the check and yields a numerically
//!   unstable inverse.
//!
//! ## Non-goals
//!
//! * No pivoted elimination, decomposition-based, or iterative solvers.
//! * No conditioning estimates or tolerance-based rank decisions.

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
// Square-Matrix Operations
// ============================================================================

impl<T: Float> Matrix<T> {
    /// The `(n-1) x (n-1)` submatrix with row `r` and column `c` deleted.
    ///
    /// # Errors
    ///
    /// * [`CurveFitError::NotSquare`] if the matrix is rectangular.
    /// * [`CurveFitError::EmptyMatrix`] if the matrix is `1x1` (the minor
    ///   would have no cells).
    ///
    /// # Panics
    ///
    /// Panics if `r` or `c` is out of bounds.
    pub fn minor(&self, r: usize, c: usize) -> Result<Self, CurveFitError> {
        let n = self.require_square()?;
        assert!(r < n && c < n, "minor ({}, {}) out of bounds for order {}", r, c, n);
        if n == 1 {
            return Err(CurveFitError::EmptyMatrix);
        }

        let mut data = Vec::with_capacity((n - 1) * (n - 1));
        for i in (0..n).filter(|&i| i != r) {
            for j in (0..n).filter(|&j| j != c) {
                data.push(self.get(i, j));
            }
        }
        Self::from_vec(n - 1, n - 1, data)
    }

    /// The signed cofactor `det(minor(r, c)) * (-1)^(r+c)`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Matrix::minor`].
    pub fn cofactor(&self, r: usize, c: usize) -> Result<T, CurveFitError> {
        let det = self.minor(r, c)?.determinant()?;
        if (r + c) % 2 == 0 {
            Ok(det)
        } else {
            Ok(-det)
        }
    }

    /// The determinant, by recursive cofactor expansion along row 0.
    ///
    /// Base case: the `1x1` determinant is the single cell, exactly.
    /// General case: `Σ_c self[0][c] * cofactor(0, c)`.
    ///
    /// O(n!) in the matrix order — fine for the small systems the
    /// regression layer produces, prohibitive beyond that.
    ///
    /// # Errors
    ///
    /// [`CurveFitError::NotSquare`] if the matrix is rectangular.
    pub fn determinant(&self) -> Result<T, CurveFitError> {
        let n = self.require_square()?;
        if n == 1 {
            return Ok(self.get(0, 0));
        }

        let mut det = T::zero();
        for c in 0..n {
            det = det + self.get(0, c) * self.cofactor(0, c)?;
        }
        Ok(det)
    }

    /// The inverse, as the adjugate (transposed cofactor matrix) over the
    /// determinant.
    ///
    /// Base case: the `1x1` inverse is `[[1 / cell]]`.
    ///
    /// # Errors
    ///
    /// * [`CurveFitError::NotSquare`] if the matrix is rectangular.
    /// * [`CurveFitError::SingularMatrix`] if the determinant is exactly
    ///   zero. Near-singular matrices pass and may invert unstably; no
    ///   tolerance is applied.
    pub fn inverse(&self) -> Result<Self, CurveFitError> {
        let n = self.require_square()?;
        let det = self.determinant()?;
        if det == T::zero() {
            return Err(CurveFitError::SingularMatrix);
        }

        if n == 1 {
            return Self::from_vec(1, 1, vec![T::one() / det]);
        }

        // Cofactor matrix, transposed in place of construction: writing the
        // (r, c) cofactor to slot (c, r) yields the adjugate directly.
        let mut adjugate = Self::zeros(n, n);
        for r in 0..n {
            for c in 0..n {
                adjugate.set(c, r, self.cofactor(r, c)?);
            }
        }
        Ok(adjugate.scale(T::one() / det))
    }

    // Order of the matrix, or NotSquare.
    fn require_square(&self) -> Result<usize, CurveFitError> {
        if !self.is_square() {
            return Err(CurveFitError::NotSquare {
                rows: self.n_rows(),
                cols: self.n_cols(),
            });
        }
        Ok(self.n_rows())
    }
}
