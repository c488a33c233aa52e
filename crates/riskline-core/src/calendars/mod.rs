//! Trading calendars.
//!
//! This module provides:
//! - The [`TradingCalendar`] lookup contract used to measure how stale a
//!   market observation is
//! - A weekend-only calendar
//! - A calendar backed by an explicit list of trading sessions

mod sessions;

pub use sessions::SessionCalendar;

use crate::types::Date;

/// Trait for trading calendars.
///
/// Calendars determine which days the market trades and how many trading
/// days separate two dates.
pub trait TradingCalendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &str;

    /// Returns true if the market trades on the date.
    fn is_trading_day(&self, date: Date) -> bool;

    /// Counts trading days in `(earlier, later]` between two dates, in either order.
    ///
    /// Returns `None` when the distance cannot be determined for this calendar.
    fn trading_day_distance(&self, a: Date, b: Date) -> Option<i64> {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };

        let mut count = 0;
        let mut current = start.add_days(1);
        while current <= end {
            if self.is_trading_day(current) {
                count += 1;
            }
            current = current.add_days(1);
        }

        Some(count)
    }
}

/// A simple weekend-only calendar (no holidays).
///
/// Useful for testing or when holiday data is not available.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl TradingCalendar for WeekendCalendar {
    fn name(&self) -> &str {
        "Weekend Only"
    }

    fn is_trading_day(&self, date: Date) -> bool {
        date.is_weekday()
    }
}
