//! Layer 2: Matrix
//!
//! # Purpose
//!
//! This layer provides the dense matrix kernel every fit is built on:
//! - Rectangular row-major storage with arithmetic operators
//! - Minor extraction, cofactor expansion, determinant, inverse
//! - The normal-equations least-squares solver
//!
//! These are reusable numeric building blocks with no model-specific logic.
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
//! Layer 2: Matrix ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

// Storage, constructors, elementwise and product arithmetic.
mod dense;

// Minor/cofactor extraction, determinant, inverse.
mod cofactor;

// Normal-equations least-squares solver.
mod solve;

pub use dense::Matrix;
