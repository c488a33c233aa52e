//! In-memory treasury curve table.
//!
//! A [`TreasuryCurves`] table maps observation dates to [`CurveSnapshot`]s,
//! each holding an optional rate per [`TreasuryDuration`]. Storage at rest is
//! up to the caller; the table only needs to answer date-ordered lookups.
//!
//! # JSON layout
//!
//! ```json
//! {
//!   "2013-01-02": { "1month": 0.0007, "3month": 0.0008, "30year": 0.0304 },
//!   "2013-01-03": { "1month": null, "3month": 0.0008 }
//! }
//! ```

use riskline_core::Date;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::duration::TreasuryDuration;
use crate::error::{CurveError, CurveResult};

/// Rates observed for one date, keyed by duration.
///
/// A missing key, an explicit `None`, and a non-finite value all mean there is
/// no data for that duration on that date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurveSnapshot {
    rates: BTreeMap<TreasuryDuration, Option<f64>>,
}

impl CurveSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a snapshot from `(duration, rate)` pairs.
    pub fn from_rates<I>(rates: I) -> Self
    where
        I: IntoIterator<Item = (TreasuryDuration, f64)>,
    {
        Self {
            rates: rates.into_iter().map(|(d, r)| (d, Some(r))).collect(),
        }
    }

    /// Sets the rate for a duration.
    #[must_use]
    pub fn with_rate(mut self, duration: TreasuryDuration, rate: f64) -> Self {
        self.rates.insert(duration, Some(rate));
        self
    }

    /// Marks a duration as having no data.
    #[must_use]
    pub fn without_rate(mut self, duration: TreasuryDuration) -> Self {
        self.rates.insert(duration, None);
        self
    }

    /// Sets or clears the rate for a duration.
    pub fn set(&mut self, duration: TreasuryDuration, rate: Option<f64>) {
        self.rates.insert(duration, rate);
    }

    /// Returns the usable rate for a duration, if any.
    #[must_use]
    pub fn rate(&self, duration: TreasuryDuration) -> Option<f64> {
        self.rates
            .get(&duration)
            .copied()
            .flatten()
            .filter(|r| r.is_finite())
    }

    /// Scans from `duration` toward longer tenors and returns the first usable rate.
    #[must_use]
    pub fn escalate(&self, duration: TreasuryDuration) -> Option<(TreasuryDuration, f64)> {
        duration
            .longer_or_equal()
            .iter()
            .find_map(|&d| self.rate(d).map(|r| (d, r)))
    }

    /// Returns true if no duration has a usable rate.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.escalate(TreasuryDuration::M1).is_none()
    }
}

/// Treasury curve snapshots ordered by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreasuryCurves {
    curves: BTreeMap<Date, CurveSnapshot>,
}

impl TreasuryCurves {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a table from JSON (see the module docs for the layout).
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidData` if the JSON is malformed or uses an
    /// unknown duration label.
    pub fn from_json_str(json: &str) -> CurveResult<Self> {
        serde_json::from_str(json).map_err(|e| CurveError::invalid_data(e.to_string()))
    }

    /// Inserts a snapshot, returning the one it replaced.
    pub fn insert(&mut self, date: Date, snapshot: CurveSnapshot) -> Option<CurveSnapshot> {
        self.curves.insert(date, snapshot)
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with_snapshot(mut self, date: Date, snapshot: CurveSnapshot) -> Self {
        self.curves.insert(date, snapshot);
        self
    }

    /// Removes and returns the snapshot for a date.
    pub fn remove(&mut self, date: Date) -> Option<CurveSnapshot> {
        self.curves.remove(&date)
    }

    /// Returns the snapshot stored at exactly `date`.
    #[must_use]
    pub fn get(&self, date: Date) -> Option<&CurveSnapshot> {
        self.curves.get(&date)
    }

    /// Returns a mutable reference to the snapshot stored at exactly `date`.
    pub fn get_mut(&mut self, date: Date) -> Option<&mut CurveSnapshot> {
        self.curves.get_mut(&date)
    }

    /// Returns true if a snapshot is stored at exactly `date`.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.curves.contains_key(&date)
    }

    /// Returns the latest snapshot dated on or before `date`.
    #[must_use]
    pub fn last_on_or_before(&self, date: Date) -> Option<(Date, &CurveSnapshot)> {
        self.curves
            .range(..=date)
            .next_back()
            .map(|(d, s)| (*d, s))
    }

    /// Iterates over snapshots dated strictly before `date`, latest first.
    pub fn before(&self, date: Date) -> impl Iterator<Item = (Date, &CurveSnapshot)> + '_ {
        self.curves.range(..date).rev().map(|(d, s)| (*d, s))
    }

    /// Iterates over stored dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.curves.keys().copied()
    }

    /// Returns the earliest stored date.
    #[must_use]
    pub fn first_date(&self) -> Option<Date> {
        self.curves.keys().next().copied()
    }

    /// Returns the latest stored date.
    #[must_use]
    pub fn last_date(&self) -> Option<Date> {
        self.curves.keys().next_back().copied()
    }

    /// Returns true if `date` falls within `[first_date, last_date]`.
    #[must_use]
    pub fn spans(&self, date: Date) -> bool {
        match (self.first_date(), self.last_date()) {
            (Some(first), Some(last)) => first <= date && date <= last,
            _ => false,
        }
    }

    /// Returns the number of stored dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Returns true if the table holds no snapshots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

impl FromIterator<(Date, CurveSnapshot)> for TreasuryCurves {
    fn from_iter<T: IntoIterator<Item = (Date, CurveSnapshot)>>(iter: T) -> Self {
        Self {
            curves: iter.into_iter().collect(),
        }
    }
}
