//! Layer 3: Regression
//!
//! # Purpose
//!
//! This layer builds least-squares curve fits on top of the matrix kernel:
//! - Input validation (lengths, minimum counts, finiteness, log domains)
//! - The four named models: linear, quadratic, power, exponential
//! - A closed-form fast path for the single-predictor linear case
//!
//! Every fit constructs a design matrix and delegates the solve to
//! [`Matrix::solve_least_squares`](crate::Matrix::solve_least_squares);
//! no model re-implements the normal equations on raw loops.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Regression ← You are here
//!   ↓
//! Layer 2: Matrix
//!   ↓
//! Layer 1: Primitives
//! ```

// Fail-fast input validation.
mod validator;

// Closed-form single-predictor linear fit.
mod closed_form;

// The four fit models and their entry points.
mod models;

pub use closed_form::fit_line_direct;
pub use models::{
    fit_exponential, fit_linear, fit_power, fit_quadratic, ExponentialFit, LinearFit, PowerFit,
    QuadraticFit,
};
pub use validator::Validator;
