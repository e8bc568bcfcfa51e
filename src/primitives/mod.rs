//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer holds the crate-wide error taxonomy. Every fallible operation
//! in the matrix kernel, the regression layer, and the fluent API reports
//! failures through [`errors::CurveFitError`].
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Regression
//!   ↓
//! Layer 2: Matrix
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types shared across all layers.
pub mod errors;
