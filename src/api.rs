//! High-level API for curve fitting.
//!
//! ## Purpose
//!
//! This module provides the fluent entry point for fitting: pick a model
//! kind, optionally request diagnostics, and fit. It is sugar over the free
//! functions ([`fit_linear`](crate::fit_linear) and friends), which remain
//! the primary contract and are always available directly.
//!
//! ## Design notes
//!
//! * **Ergonomic**: builder with sensible defaults; only specify what you
//!   want to change.
//! * **Validated**: parameters are checked when `.fit()` is called, and a
//!   parameter set twice is reported as an error rather than silently
//!   last-write-wins.
//! * **Reusable**: the builder is not consumed by `.fit()`, so one
//!   configuration can fit many datasets.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`CurveFit`] via `CurveFit::new()`.
//! 2. Chain configuration methods (`.model()`, `.return_diagnostics()`).
//! 3. Call `.fit(&x, &y)` to obtain a [`FitReport`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::evaluation::diagnostics::FitDiagnostics;
use crate::primitives::errors::CurveFitError;
use crate::regression::{
    fit_exponential, fit_linear, fit_power, fit_quadratic, ExponentialFit, LinearFit, PowerFit,
    QuadraticFit,
};

// ============================================================================
// Model Selection
// ============================================================================

/// The curve family to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// `y = m·x + b`
    Linear,
    /// `y = a·x² + b·x + c`
    Quadratic,
    /// `y = a·xⁿ` (requires strictly positive x and y)
    Power,
    /// `y = a·bˣ` (requires strictly positive y)
    Exponential,
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring and running a curve fit.
///
/// # Examples
///
/// ```
/// use curvefit_rs::prelude::*;
///
/// let report = CurveFit::new()
///     .model(ModelKind::Exponential)
///     .return_diagnostics()
///     .fit(&[0.0f64, 1.0, 2.0, 3.0], &[2.0, 4.0, 8.0, 16.0])?;
///
/// assert!((report.predict(4.0) - 32.0).abs() < 1e-6);
/// # Result::<(), CurveFitError>::Ok(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurveFit {
    /// Selected model family (default: Linear).
    model: Option<ModelKind>,

    /// Whether to compute fit diagnostics (default: off).
    return_diagnostics: Option<bool>,

    /// First parameter observed to be set twice, reported at fit time.
    duplicate_param: Option<&'static str>,
}

impl CurveFit {
    /// Create a builder with default settings (linear model, no
    /// diagnostics).
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the model family to fit (default: [`ModelKind::Linear`]).
    pub fn model(mut self, kind: ModelKind) -> Self {
        if self.model.is_some() {
            self.duplicate_param = Some("model");
        }
        self.model = Some(kind);
        self
    }

    /// Include goodness-of-fit diagnostics (RMSE, MAE, R²) in the report.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    /// Fit the configured model to the samples.
    ///
    /// # Errors
    ///
    /// * [`CurveFitError::DuplicateParameter`] if a parameter was set more
    ///   than once.
    /// * Every condition the underlying fit function can raise (length
    ///   mismatch, too few points, non-finite samples, log-domain
    ///   violations, singular normal matrix).
    pub fn fit<T: Float>(&self, x: &[T], y: &[T]) -> Result<FitReport<T>, CurveFitError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(CurveFitError::DuplicateParameter { parameter });
        }

        let kind = self.model.unwrap_or(ModelKind::Linear);
        let model = match kind {
            ModelKind::Linear => FittedModel::Linear(fit_linear(x, y)?),
            ModelKind::Quadratic => FittedModel::Quadratic(fit_quadratic(x, y)?),
            ModelKind::Power => FittedModel::Power(fit_power(x, y)?),
            ModelKind::Exponential => FittedModel::Exponential(fit_exponential(x, y)?),
        };

        let diagnostics = if self.return_diagnostics.unwrap_or(false) {
            let predicted: Vec<T> = x.iter().map(|&xi| model.predict(xi)).collect();
            Some(FitDiagnostics::compute(y, &predicted)?)
        } else {
            None
        };

        Ok(FitReport { model, diagnostics })
    }
}

// ============================================================================
// Fitted Model Dispatch
// ============================================================================

/// A fitted model of any family, dispatching to the underlying fit struct.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FittedModel<T> {
    /// A fitted straight line.
    Linear(LinearFit<T>),
    /// A fitted parabola.
    Quadratic(QuadraticFit<T>),
    /// A fitted power law.
    Power(PowerFit<T>),
    /// A fitted exponential.
    Exponential(ExponentialFit<T>),
}

impl<T: Float> FittedModel<T> {
    /// Which model family this is.
    pub fn kind(&self) -> ModelKind {
        match self {
            Self::Linear(_) => ModelKind::Linear,
            Self::Quadratic(_) => ModelKind::Quadratic,
            Self::Power(_) => ModelKind::Power,
            Self::Exponential(_) => ModelKind::Exponential,
        }
    }

    /// Evaluate the fitted curve at `x`.
    pub fn predict(&self, x: T) -> T {
        match self {
            Self::Linear(m) => m.predict(x),
            Self::Quadratic(m) => m.predict(x),
            Self::Power(m) => m.predict(x),
            Self::Exponential(m) => m.predict(x),
        }
    }

    /// The raw coefficients flat, in each family's documented order.
    pub fn coefficients(&self) -> Vec<T> {
        match self {
            Self::Linear(m) => m.coefficients().to_vec(),
            Self::Quadratic(m) => m.coefficients().to_vec(),
            Self::Power(m) => m.coefficients().to_vec(),
            Self::Exponential(m) => m.coefficients().to_vec(),
        }
    }
}

// ============================================================================
// Fit Report
// ============================================================================

/// The result of a builder-driven fit: the fitted model plus any requested
/// diagnostics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitReport<T> {
    /// The fitted model.
    pub model: FittedModel<T>,
    /// Diagnostics, present when requested via
    /// [`CurveFit::return_diagnostics`].
    pub diagnostics: Option<FitDiagnostics<T>>,
}

impl<T: Float> FitReport<T> {
    /// Evaluate the fitted curve at `x`.
    pub fn predict(&self, x: T) -> T {
        self.model.predict(x)
    }
}

impl<T: Float + fmt::Display> fmt::Display for FitReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        match &self.model {
            FittedModel::Linear(m) => {
                writeln!(f, "  Model: Linear")?;
                writeln!(f, "  Equation: y = {}*x + {}", m.slope, m.intercept)?;
            }
            FittedModel::Quadratic(m) => {
                writeln!(f, "  Model: Quadratic")?;
                writeln!(
                    f,
                    "  Equation: y = {}*x^2 + {}*x + {}",
                    m.quadratic, m.linear, m.intercept
                )?;
            }
            FittedModel::Power(m) => {
                writeln!(f, "  Model: Power")?;
                writeln!(f, "  Equation: y = {}*x^{}", m.coefficient, m.exponent)?;
            }
            FittedModel::Exponential(m) => {
                writeln!(f, "  Model: Exponential")?;
                writeln!(f, "  Equation: y = {}*{}^x", m.coefficient, m.base)?;
            }
        }

        if let Some(diag) = &self.diagnostics {
            writeln!(f)?;
            writeln!(f, "Diagnostics:")?;
            writeln!(f, "  RMSE:         {}", diag.rmse)?;
            writeln!(f, "  MAE:          {}", diag.mae)?;
            writeln!(f, "  R^2:          {}", diag.r_squared)?;
            writeln!(f, "  Residual SD:  {}", diag.residual_sd)?;
        }
        Ok(())
    }
}
