//! Calendar backed by an explicit list of trading sessions.
//!
//! # Example
//!
//! ```
//! use riskline_core::calendars::{SessionCalendar, TradingCalendar};
//! use riskline_core::types::Date;
//!
//! let cal = SessionCalendar::new(
//!     "NYSE 2025 (partial)",
//!     vec![
//!         Date::from_ymd(2025, 1, 2).unwrap(),
//!         Date::from_ymd(2025, 1, 3).unwrap(),
//!         Date::from_ymd(2025, 1, 6).unwrap(),
//!     ],
//! );
//!
//! let a = Date::from_ymd(2025, 1, 2).unwrap();
//! let b = Date::from_ymd(2025, 1, 6).unwrap();
//! assert_eq!(cal.trading_day_distance(a, b), Some(2));
//! ```

use super::TradingCalendar;
use crate::types::Date;
use log::debug;
use serde::{Deserialize, Serialize};

/// A trading calendar defined by the sessions it contains.
///
/// Distances are session-index differences, so they are only defined when
/// both dates are sessions. Any other pair yields `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCalendar {
    name: String,
    sessions: Vec<Date>,
}

impl SessionCalendar {
    /// Creates a calendar from session dates in any order. Duplicates are dropped.
    pub fn new(name: impl Into<String>, sessions: impl IntoIterator<Item = Date>) -> Self {
        let mut sessions: Vec<Date> = sessions.into_iter().collect();
        sessions.sort_unstable();
        sessions.dedup();
        Self {
            name: name.into(),
            sessions,
        }
    }

    /// Returns the number of sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns true if the calendar has no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Returns the sessions in ascending order.
    #[must_use]
    pub fn sessions(&self) -> &[Date] {
        &self.sessions
    }

    fn position(&self, date: Date) -> Option<usize> {
        self.sessions.binary_search(&date).ok()
    }
}

impl TradingCalendar for SessionCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_trading_day(&self, date: Date) -> bool {
        self.position(date).is_some()
    }

    fn trading_day_distance(&self, a: Date, b: Date) -> Option<i64> {
        match (self.position(a), self.position(b)) {
            (Some(i), Some(j)) => Some((j as i64 - i as i64).abs()),
            _ => {
                debug!("{}: no session distance between {} and {}", self.name, a, b);
                None
            }
        }
    }
}
