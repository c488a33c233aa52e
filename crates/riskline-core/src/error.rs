//! Error types for the Riskline core crate.

use thiserror::Error;

use crate::types::Date;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A return series was not strictly ascending by date.
    #[error("Return series out of order at index {index}: {date} does not follow {previous}")]
    UnorderedSeries {
        /// Index of the offending entry.
        index: usize,
        /// Date of the preceding entry.
        previous: Date,
        /// Date of the offending entry.
        date: Date,
    },

    /// A period whose start falls after its end.
    #[error("Invalid period: start {start} is after end {end}")]
    InvalidPeriod {
        /// Period start.
        start: Date,
        /// Period end.
        end: Date,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid period error.
    #[must_use]
    pub fn invalid_period(start: Date, end: Date) -> Self {
        Self::InvalidPeriod { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_date("2024-02-30");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_unordered_display() {
        let err = CoreError::UnorderedSeries {
            index: 3,
            previous: Date::from_ymd(2024, 1, 5).unwrap(),
            date: Date::from_ymd(2024, 1, 4).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("index 3"));
        assert!(msg.contains("2024-01-04"));
    }
}
