//! Risk-free rate resolution for holding periods.
//!
//! Given a holding period `[start, end]`, the resolver picks the treasury
//! duration matching the period length and looks up a rate on the end date.
//! Two fallbacks apply, in order:
//!
//! 1. **Duration escalation**: if the matching duration has no data on a
//!    date, the next longer duration is tried, up to 30 years.
//! 2. **Date regression**: if the end date has no usable rate at all, earlier
//!    dates are searched, latest first.
//!
//! The annual rate is pro-rated linearly over the inclusive day count:
//! `rate * (days + 1) / 365`.

use log::warn;
use riskline_core::calendars::TradingCalendar;
use riskline_core::Date;
use serde::Serialize;
use std::fmt;

use crate::duration::{select_duration, TreasuryDuration};
use crate::error::{CurveError, CurveResult};
use crate::table::TreasuryCurves;

/// Log target for treasury lookups.
pub const LOG_TARGET: &str = "riskline::treasury";

/// Days per year used for pro-rating.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Warning raised when the resolved rate is older than the requested date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaleRateWarning {
    /// The requested end date.
    pub end_date: Date,
    /// The duration selected for the holding period.
    pub duration: TreasuryDuration,
    /// The date the rate was actually taken from.
    pub source_date: Date,
    /// Trading days between the two, when the calendar could tell.
    pub trading_days: Option<i64>,
}

impl fmt::Display for StaleRateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No rate within 1 trading day of end date = {} and term = {}. Using {}. \
             Check that date doesn't exceed treasury history range.",
            self.end_date, self.duration, self.source_date
        )
    }
}

/// A resolved risk-free rate with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreasuryRate {
    /// Duration selected for the holding period.
    pub requested_duration: TreasuryDuration,
    /// Duration the rate was read from (equal or longer).
    pub source_duration: TreasuryDuration,
    /// Curve date the rate was read from (on or before the end date).
    pub source_date: Date,
    /// Annualized rate as stored in the curve table.
    pub annual_rate: f64,
    /// Rate pro-rated over the holding period.
    pub period_return: f64,
    /// Set when the source date is stale relative to the end date.
    pub stale: Option<StaleRateWarning>,
}

impl TreasuryRate {
    /// Returns true if a staleness warning was raised for this rate.
    ///
    /// A rate taken from an earlier date is not stale when it is within one
    /// trading day of the end date, or when the end date lies past the table.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.stale.is_some()
    }
}

/// Resolves risk-free rates against a curve table.
///
/// Both the table and the trading calendar are borrowed for the lifetime of
/// the resolver; nothing is cached between lookups.
///
/// # Example
///
/// ```rust
/// use riskline_core::calendars::WeekendCalendar;
/// use riskline_core::Date;
/// use riskline_curves::{CurveSnapshot, TreasuryCurves, TreasuryDuration, TreasuryRateResolver};
///
/// let end = Date::from_ymd(2013, 1, 31).unwrap();
/// let curves = TreasuryCurves::new().with_snapshot(
///     end,
///     CurveSnapshot::new().with_rate(TreasuryDuration::M1, 0.0365),
/// );
/// let resolver = TreasuryRateResolver::new(&curves, &WeekendCalendar);
///
/// let start = Date::from_ymd(2013, 1, 1).unwrap();
/// let r = resolver.resolve(start, end).unwrap();
/// assert!((r - 0.0365 * 31.0 / 365.0).abs() < 1e-15);
/// ```
#[derive(Clone, Copy)]
pub struct TreasuryRateResolver<'a> {
    curves: &'a TreasuryCurves,
    calendar: &'a dyn TradingCalendar,
}

impl<'a> TreasuryRateResolver<'a> {
    /// Creates a resolver over a curve table and trading calendar.
    #[must_use]
    pub fn new(curves: &'a TreasuryCurves, calendar: &'a dyn TradingCalendar) -> Self {
        Self { curves, calendar }
    }

    /// Returns the underlying curve table.
    #[must_use]
    pub fn curves(&self) -> &'a TreasuryCurves {
        self.curves
    }

    /// Returns the pro-rated risk-free return for `[start_date, end_date]`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::TreasuryDataUnavailable` when no usable rate exists
    /// on or before the end date for the selected duration or any longer one.
    pub fn resolve(&self, start_date: Date, end_date: Date) -> CurveResult<f64> {
        self.lookup(start_date, end_date).map(|r| r.period_return)
    }

    /// Resolves the rate for `[start_date, end_date]` and reports where it came from.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::TreasuryDataUnavailable` when the search is exhausted.
    pub fn lookup(&self, start_date: Date, end_date: Date) -> CurveResult<TreasuryRate> {
        let duration = select_duration(start_date, end_date);
        let end_day = end_date;

        let exact = self
            .curves
            .get(end_day)
            .and_then(|snapshot| snapshot.escalate(duration))
            .map(|(source_duration, rate)| (end_day, source_duration, rate));

        let (source_date, source_duration, annual_rate, stale) = match exact {
            Some((date, d, rate)) => (date, d, rate, None),
            None => {
                // End date is not a curve date, or has no usable rate:
                // walk back to the most recent date that has one.
                let (date, d, rate) = self
                    .curves
                    .before(end_day)
                    .find_map(|(date, snapshot)| {
                        snapshot.escalate(duration).map(|(d, rate)| (date, d, rate))
                    })
                    .ok_or_else(|| CurveError::unavailable(end_date, duration))?;

                let stale = self.staleness(end_date, duration, date);
                (date, d, rate, stale)
            }
        };

        let days = end_date - start_date;
        Ok(TreasuryRate {
            requested_duration: duration,
            source_duration,
            source_date,
            annual_rate,
            period_return: pro_rate(annual_rate, days),
            stale,
        })
    }

    fn staleness(
        &self,
        end_date: Date,
        duration: TreasuryDuration,
        source_date: Date,
    ) -> Option<StaleRateWarning> {
        let trading_days = self.calendar.trading_day_distance(source_date, end_date);
        let distant = trading_days.map_or(true, |n| n > 1);

        // Past the end of the table the gap is expected, so stay quiet.
        if distant && self.curves.spans(end_date) {
            let warning = StaleRateWarning {
                end_date,
                duration,
                source_date,
                trading_days,
            };
            warn!(target: LOG_TARGET, "{warning}");
            Some(warning)
        } else {
            None
        }
    }
}

impl fmt::Debug for TreasuryRateResolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreasuryRateResolver")
            .field("curve_dates", &self.curves.len())
            .field("calendar", &self.calendar.name())
            .finish()
    }
}

/// Pro-rates an annual rate over `days` elapsed days, counting both endpoints.
#[must_use]
pub fn pro_rate(annual_rate: f64, days: i64) -> f64 {
    annual_rate * (days + 1) as f64 / DAYS_PER_YEAR
}
