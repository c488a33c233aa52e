//! Error types for treasury curve operations.

use riskline_core::{CoreError, Date};
use thiserror::Error;

use crate::duration::TreasuryDuration;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// No usable rate at or before the requested date, for the requested
    /// duration or any longer one.
    #[error(
        "No rate for end date = {end_date} and term = {duration}. \
         Check that date doesn't exceed treasury history range."
    )]
    TreasuryDataUnavailable {
        /// The requested end date.
        end_date: Date,
        /// The duration selected for the holding period.
        duration: TreasuryDuration,
    },

    /// A curve label that is not one of the canonical durations.
    #[error("Unknown treasury duration: {label}")]
    UnknownDuration {
        /// The unrecognised label.
        label: String,
    },

    /// Curve data could not be parsed.
    #[error("Invalid curve data: {reason}")]
    InvalidData {
        /// Description of the problem.
        reason: String,
    },

    /// Error from the core crate.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CurveError {
    /// Creates a treasury data unavailable error.
    #[must_use]
    pub fn unavailable(end_date: Date, duration: TreasuryDuration) -> Self {
        Self::TreasuryDataUnavailable { end_date, duration }
    }

    /// Creates an unknown duration error.
    #[must_use]
    pub fn unknown_duration(label: impl Into<String>) -> Self {
        Self::UnknownDuration {
            label: label.into(),
        }
    }

    /// Creates an invalid data error.
    #[must_use]
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        Self::InvalidData {
            reason: reason.into(),
        }
    }
}
