//! Error types for risk analytics.
//!
//! Treasury lookup failures and core validation errors are wrapped so that a
//! single `?` carries them up through period computation to the report.

use riskline_core::CoreError;
use riskline_curves::CurveError;
use thiserror::Error;

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur while computing risk metrics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Risk-free rate resolution failed.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Core type validation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Invalid input to a calculation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {reason}")]
    Config {
        /// Description of the problem.
        reason: String,
    },
}

impl AnalyticsError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Returns true if the error is a missing treasury rate.
    #[must_use]
    pub fn is_treasury_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Curve(CurveError::TreasuryDataUnavailable { .. })
        )
    }
}
