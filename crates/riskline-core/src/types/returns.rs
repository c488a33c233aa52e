//! Daily return observations and date-ordered return series.

use serde::{Deserialize, Serialize};

use super::Date;
use crate::error::{CoreError, CoreResult};

/// A single daily return observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyReturn {
    /// Observation date.
    pub date: Date,
    /// Simple return for the day (0.01 = 1%).
    pub value: f64,
}

impl DailyReturn {
    /// Creates a new daily return.
    #[must_use]
    pub fn new(date: Date, value: f64) -> Self {
        Self { date, value }
    }
}

/// A sequence of daily returns, strictly ascending by date.
///
/// The ordering invariant is checked once at construction so that window
/// slicing can use binary search. An empty series is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReturnSeries {
    entries: Vec<DailyReturn>,
}

impl ReturnSeries {
    /// Creates a series from entries that must be strictly ascending by date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnorderedSeries` at the first entry whose date does
    /// not follow its predecessor.
    pub fn new(entries: Vec<DailyReturn>) -> CoreResult<Self> {
        if let Some(index) = entries.windows(2).position(|w| w[0].date >= w[1].date) {
            return Err(CoreError::UnorderedSeries {
                index: index + 1,
                previous: entries[index].date,
                date: entries[index + 1].date,
            });
        }
        Ok(Self { entries })
    }

    /// Creates a series from `(date, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnorderedSeries` if the dates are not strictly ascending.
    pub fn from_pairs<I>(pairs: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (Date, f64)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(date, value)| DailyReturn::new(date, value))
                .collect(),
        )
    }

    /// Creates an empty series.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the series has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the date of the first observation.
    #[must_use]
    pub fn first_date(&self) -> Option<Date> {
        self.entries.first().map(|r| r.date)
    }

    /// Returns the date of the last observation.
    #[must_use]
    pub fn last_date(&self) -> Option<Date> {
        self.entries.last().map(|r| r.date)
    }

    /// Returns all observations.
    #[must_use]
    pub fn entries(&self) -> &[DailyReturn] {
        &self.entries
    }

    /// Returns the observations dated within `[start, end]`, inclusive.
    #[must_use]
    pub fn slice(&self, start: Date, end: Date) -> &[DailyReturn] {
        if start > end {
            return &[];
        }
        let lo = self.entries.partition_point(|r| r.date < start);
        let hi = self.entries.partition_point(|r| r.date <= end);
        &self.entries[lo..hi]
    }

    /// Returns the return values in date order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|r| r.value).collect()
    }

    /// Iterates over the observations in date order.
    pub fn iter(&self) -> std::slice::Iter<'_, DailyReturn> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ReturnSeries {
    type Item = &'a DailyReturn;
    type IntoIter = std::slice::Iter<'a, DailyReturn>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'de> Deserialize<'de> for ReturnSeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            entries: Vec<DailyReturn>,
        }

        let raw = Raw::deserialize(deserializer)?;
        ReturnSeries::new(raw.entries).map_err(serde::de::Error::custom)
    }
}
