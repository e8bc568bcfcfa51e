//! # curvefit — dense-matrix least-squares curve fitting for Rust
//!
//! A small, self-contained curve-fitting library: a dense matrix kernel
//! (transpose, product, cofactor-expansion determinant and inverse) and a
//! least-squares regression layer built on top of it, exposing linear,
//! quadratic, power-law, and exponential models.
//!
//! ## What it does
//!
//! Each fit builds a design matrix from the sample data, solves the normal
//! equations `(XᵀX)c = Xᵀy` through the kernel's inverse, and returns a model
//! struct that holds the fitted coefficients and evaluates the curve at
//! arbitrary points:
//!
//! - **Linear**: `y = m·x + b`
//! - **Quadratic**: `y = a·x² + b·x + c`
//! - **Power**: `y = a·xⁿ` (log-log linearization)
//! - **Exponential**: `y = a·bˣ` (semi-log linearization)
//!
//! ## Quick Start
//!
//! ```rust
//! use curvefit_rs::prelude::*;
//!
//! let x = vec![1.0f64, 2.0, 3.0, 4.0];
//! let y = vec![2.0, 4.0, 6.0, 8.0];
//!
//! let fit = fit_linear(&x, &y)?;
//!
//! assert!((fit.slope - 2.0).abs() < 1e-10);
//! assert!(fit.intercept.abs() < 1e-10);
//! assert!((fit.predict(5.0) - 10.0).abs() < 1e-10);
//! # Result::<(), CurveFitError>::Ok(())
//! ```
//!
//! Or through the fluent builder, which can also report fit diagnostics:
//!
//! ```rust
//! use curvefit_rs::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![2.9, 9.1, 18.8, 33.2, 50.5];
//!
//! let report = CurveFit::new()
//!     .model(ModelKind::Quadratic)
//!     .return_diagnostics()
//!     .fit(&x, &y)?;
//!
//! println!("{}", report);
//! if let Some(diag) = &report.diagnostics {
//!     assert!(diag.r_squared > 0.99);
//! }
//! # Result::<(), CurveFitError>::Ok(())
//! ```
//!
//! The matrix kernel is public and usable on its own:
//!
//! ```rust
//! use curvefit_rs::prelude::*;
//!
//! let m = Matrix::from_rows(vec![vec![2.0, 0.0], vec![0.0, 2.0]])?;
//! let inv = m.inverse()?;
//! assert_eq!(inv.get(0, 0), 0.5);
//! # Result::<(), CurveFitError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every fallible operation returns `Result<_, CurveFitError>`. Errors are
//! raised synchronously at the point of violation, before any partial
//! computation — ragged construction input, shape mismatches, singular
//! matrices, log of a non-positive value, and mismatched or too-short sample
//! arrays each map to a distinct variant. The `?` operator is idiomatic:
//!
//! ```rust
//! use curvefit_rs::prelude::*;
//! # let x = vec![1.0, 2.0, 3.0];
//! # let y = vec![2.0, 4.0, 6.0];
//!
//! let fit = fit_linear(&x, &y)?;
//! # Result::<(), CurveFitError>::Ok(())
//! ```
//!
//! There is no recovery path inside the library (no automatic regularization
//! of a singular system); the caller decides what a failed fit means.
//!
//! ## Numerical Scope
//!
//! The determinant and inverse use recursive cofactor expansion, which is
//! exponential (O(n!)) in matrix order. That is intentional: the regression
//! layer only ever produces the tiny normal-equation matrices of low-order
//! models (at most 3×3 here), where the simplest correct method wins. Bound
//! the order yourself before invoking the kernel on larger caller-supplied
//! matrices.
//!
//! Singularity is detected by an exact zero-determinant comparison. A
//! near-singular matrix with a tiny nonzero determinant will not be rejected
//! and its inverse may be numerically unstable; no tolerance is applied.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! curvefit-rs = { version = "0.1", default-features = false }
//! ```
//!
//! All computation is allocation-based (`alloc` is required); `f32` works
//! everywhere `f64` does and halves the memory footprint.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - the error taxonomy shared by every layer.
mod primitives;

// Layer 2: Matrix - the dense matrix kernel.
//
// Rectangular storage, arithmetic operators, cofactor expansion
// (minor/cofactor/determinant/inverse), and the normal-equations
// least-squares solver.
mod matrix;

// Layer 3: Regression - curve-fit models built on the kernel.
//
// Input validation, the four named fits, and the closed-form
// single-predictor fast path.
mod regression;

// Layer 4: Evaluation - post-fit diagnostics (RMSE, MAE, R²).
mod evaluation;

// High-level fluent API for configuring and running fits.
mod api;

// ============================================================================
// Public Surface
// ============================================================================

pub use api::{CurveFit, FitReport, FittedModel, ModelKind};
pub use evaluation::diagnostics::FitDiagnostics;
pub use matrix::Matrix;
pub use primitives::errors::CurveFitError;
pub use regression::{
    fit_exponential, fit_line_direct, fit_linear, fit_power, fit_quadratic, ExponentialFit,
    LinearFit, PowerFit, QuadraticFit, Validator,
};

// ============================================================================
// Prelude
// ============================================================================

/// Standard curve-fitting prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use curvefit_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{CurveFit, FitReport, FittedModel, ModelKind};
    pub use crate::evaluation::diagnostics::FitDiagnostics;
    pub use crate::matrix::Matrix;
    pub use crate::primitives::errors::CurveFitError;
    pub use crate::regression::{
        fit_exponential, fit_line_direct, fit_linear, fit_power, fit_quadratic, ExponentialFit,
        LinearFit, PowerFit, QuadraticFit,
    };
}
