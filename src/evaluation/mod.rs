//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-fit quality metrics (RMSE, MAE, R², residual
//! standard deviation). It reads observed/predicted pairs and computes; it
//! never influences the fit itself.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Regression
//!   ↓
//! Layer 2: Matrix
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit-quality diagnostics.
pub mod diagnostics;
