//! Dense rectangular matrix storage and arithmetic.
//!
//! ## Purpose
//!
//! This module provides [`Matrix`], the rectangular numeric container the
//! regression layer builds its design matrices from: immutable shape,
//! mutable content, row-major flat storage.
//!
//! ## Design notes
//!
//! * **Storage**: one flat `Vec<T>` in row-major order; cell `(r, c)` lives
//!   at index `r * cols + c`. Rows are contiguous, so row access is a slice.
//! * **Purity**: every arithmetic operation allocates and returns a new
//!   matrix (no aliasing with its operands). The single exception is
//!   [`Matrix::apply`], the explicit in-place elementwise mutation.
//! * **Checked methods first**: the named methods (`add`, `matmul`, `scale`)
//!   return `Result` and are the contract; the operator impls (`+`, `-`,
//!   `*`, unary `-`) are sugar layered on top and panic on shape errors.
//!
//! ## Invariants
//!
//! * `rows >= 1`, `cols >= 1`, and `data.len() == rows * cols` always hold
//!   for a constructed matrix. Malformed input fails at construction.
//!
//! ## Non-goals
//!
//! * No banded or sparse representations.
//! * No validation of cell values (NaN/Inf pass through); shape is the only
//!   construction-time contract.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CurveFitError;

// ============================================================================
// Matrix Type
// ============================================================================

/// A dense rectangular matrix with row-major storage.
///
/// The shape is fixed at construction; contents are mutable through
/// [`Matrix::set`] and [`Matrix::apply`]. All other operations are pure and
/// produce new matrices.
///
/// # Examples
///
/// ```
/// use curvefit_rs::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m.get(1, 0), 3.0);
/// # Result::<(), curvefit_rs::CurveFitError>::Ok(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

// ============================================================================
// Construction
// ============================================================================

impl<T: Float> Matrix<T> {
    /// Build a matrix from nested row data.
    ///
    /// Row 0 sets the column count; every subsequent row must match it.
    ///
    /// # Errors
    ///
    /// * [`CurveFitError::EmptyMatrix`] if `rows` is empty or row 0 is empty.
    /// * [`CurveFitError::RaggedRows`] if any row differs in length from
    ///   row 0.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, CurveFitError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(CurveFitError::EmptyMatrix);
        }

        let n_cols = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(CurveFitError::RaggedRows {
                    row: i,
                    expected: n_cols,
                    got: row.len(),
                });
            }
        }

        let n_rows = rows.len();
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            data.extend(row);
        }

        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Build a matrix from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// * [`CurveFitError::EmptyMatrix`] if `rows` or `cols` is zero.
    /// * [`CurveFitError::ShapeMismatch`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, CurveFitError> {
        if rows == 0 || cols == 0 {
            return Err(CurveFitError::EmptyMatrix);
        }
        if data.len() != rows * cols {
            return Err(CurveFitError::ShapeMismatch {
                op: "from_vec",
                left: (rows, cols),
                right: (1, data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a `rows x cols` matrix of zeros.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "zero-sized matrix");
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Build the `n x n` identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl<T: Float> Matrix<T> {
    /// Dimensions as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Cell at `(r, c)`.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rows` or `c >= cols`.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> T {
        assert!(
            r < self.rows && c < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            r,
            c,
            self.rows,
            self.cols
        );
        self.data[r * self.cols + c]
    }

    /// Overwrite the cell at `(r, c)` in place.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rows` or `c >= cols`.
    #[inline]
    pub fn set(&mut self, r: usize, c: usize, value: T) {
        assert!(
            r < self.rows && c < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            r,
            c,
            self.rows,
            self.cols
        );
        self.data[r * self.cols + c] = value;
    }

    /// Row `r` as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rows`.
    #[inline]
    pub fn row(&self, r: usize) -> &[T] {
        assert!(r < self.rows, "row {} out of bounds ({} rows)", r, self.rows);
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// The underlying row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

// ============================================================================
// Elementwise and Product Arithmetic
// ============================================================================

impl<T: Float> Matrix<T> {
    /// Elementwise sum with `other`.
    ///
    /// # Errors
    ///
    /// [`CurveFitError::ShapeMismatch`] if dimensions differ.
    pub fn add(&self, other: &Self) -> Result<Self, CurveFitError> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Elementwise difference with `other`.
    ///
    /// # Errors
    ///
    /// [`CurveFitError::ShapeMismatch`] if dimensions differ.
    pub fn sub(&self, other: &Self) -> Result<Self, CurveFitError> {
        self.zip_with(other, "sub", |a, b| a - b)
    }

    /// Elementwise multiply by the scalar `k`.
    ///
    /// Unary negation is `scale(-1)`, and the `-` operator is defined that
    /// way.
    pub fn scale(&self, k: T) -> Self {
        self.map(|v| v * k)
    }

    /// Standard matrix product `self · other`.
    ///
    /// The result has dimensions `(self.rows, other.cols)` and cell
    /// `(r, c) = Σ_i self[r][i] * other[i][c]`.
    ///
    /// # Errors
    ///
    /// [`CurveFitError::ShapeMismatch`] if `self.cols != other.rows`.
    pub fn matmul(&self, other: &Self) -> Result<Self, CurveFitError> {
        if self.cols != other.rows {
            return Err(CurveFitError::ShapeMismatch {
                op: "matmul",
                left: (self.rows, self.cols),
                right: (other.rows, other.cols),
            });
        }

        let mut out = Self::zeros(self.rows, other.cols);
        for r in 0..self.rows {
            for i in 0..self.cols {
                let lhs = self.data[r * self.cols + i];
                for c in 0..other.cols {
                    out.data[r * other.cols + c] =
                        out.data[r * other.cols + c] + lhs * other.data[i * other.cols + c];
                }
            }
        }
        Ok(out)
    }

    /// Transposed copy: `out[c][r] = self[r][c]`, dimensions swapped.
    ///
    /// Transposition is an involution: `m.transpose().transpose() == m`.
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                out.data[c * self.rows + r] = self.data[r * self.cols + c];
            }
        }
        out
    }

    /// New matrix with `f` applied to every cell. Pure.
    pub fn map<F: Fn(T) -> T>(&self, f: F) -> Self {
        Self {
            data: self.data.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Apply `f` to every cell in place; returns `self` for chaining.
    ///
    /// This is the one mutating bulk operation in the kernel. `&mut self`
    /// gives single-thread exclusivity; callers sharing the matrix across
    /// threads own the synchronization.
    pub fn apply<F: Fn(T) -> T>(&mut self, f: F) -> &mut Self {
        for v in self.data.iter_mut() {
            *v = f(*v);
        }
        self
    }

    /// Variadic elementwise sum of `matrices`.
    ///
    /// # Errors
    ///
    /// * [`CurveFitError::EmptyMatrix`] if `matrices` is empty.
    /// * [`CurveFitError::ShapeMismatch`] if any two operands' dimensions
    ///   differ.
    pub fn sum_all(matrices: &[Self]) -> Result<Self, CurveFitError> {
        let (first, rest) = matrices.split_first().ok_or(CurveFitError::EmptyMatrix)?;
        let mut acc = first.clone();
        for m in rest {
            if m.shape() != acc.shape() {
                return Err(CurveFitError::ShapeMismatch {
                    op: "sum_all",
                    left: acc.shape(),
                    right: m.shape(),
                });
            }
            for (a, &b) in acc.data.iter_mut().zip(m.data.iter()) {
                *a = *a + b;
            }
        }
        Ok(acc)
    }

    // Shared elementwise combinator for add/sub.
    fn zip_with<F: Fn(T, T) -> T>(
        &self,
        other: &Self,
        op: &'static str,
        f: F,
    ) -> Result<Self, CurveFitError> {
        if self.shape() != other.shape() {
            return Err(CurveFitError::ShapeMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }
}

// ============================================================================
// Operator Sugar
// ============================================================================
//
// Operators delegate to the checked methods and panic on shape errors, the
// usual convention for numeric containers. Code that needs to handle shape
// failures calls the named methods instead.

impl<T: Float> Add for &Matrix<T> {
    type Output = Matrix<T>;

    /// `&a + &b`, elementwise.
    ///
    /// # Panics
    ///
    /// Panics if dimensions differ; see [`Matrix::add`] for the checked form.
    fn add(self, rhs: Self) -> Matrix<T> {
        match Matrix::add(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Float> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    /// `&a - &b`, elementwise.
    ///
    /// # Panics
    ///
    /// Panics if dimensions differ; see [`Matrix::sub`] for the checked form.
    fn sub(self, rhs: Self) -> Matrix<T> {
        match Matrix::sub(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Float> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    /// `&a * &b`, matrix product.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions disagree; see [`Matrix::matmul`] for
    /// the checked form.
    fn mul(self, rhs: Self) -> Matrix<T> {
        match self.matmul(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Float> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    /// `&m * k`, scalar multiply.
    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

impl<T: Float> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    /// `-&m`, defined as `scale(-1)`.
    fn neg(self) -> Matrix<T> {
        self.scale(-T::one())
    }
}

// ============================================================================
// Display
// ============================================================================

impl<T: Float + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            write!(f, "[")?;
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[r * self.cols + c])?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
