//! Integration test: resolve risk-free rates against a sparse treasury history.
//!
//! The curve table below mimics the daily H.15 history around mid-2013:
//! weekdays only, a missing session (July 4th), and 1-month bills absent on
//! some dates so that lookups must escalate to longer maturities.
//!
//! | Date       | 1M     | 3M     | 6M     | 1Y     | 30Y    |
//! |------------|--------|--------|--------|--------|--------|
//! | 2013-06-26 | 0.0003 | 0.0005 | 0.0010 | 0.0014 | 0.0352 |
//! | 2013-06-27 | 0.0002 | 0.0004 | 0.0010 | 0.0014 | 0.0350 |
//! | 2013-06-28 | -      | 0.0004 | 0.0010 | 0.0015 | 0.0352 |
//! | 2013-07-01 | 0.0002 | 0.0003 | 0.0009 | 0.0014 | 0.0350 |
//! | 2013-07-02 | -      | -      | -      | -      | -      |
//! | 2013-07-03 | 0.0002 | 0.0004 | 0.0009 | 0.0014 | 0.0354 |
//! | 2013-07-05 | 0.0003 | 0.0004 | 0.0009 | 0.0016 | 0.0368 |

use std::sync::Mutex;

use approx::assert_relative_eq;
use log::{Level, LevelFilter, Log, Metadata, Record};
use riskline_core::calendars::{SessionCalendar, WeekendCalendar};
use riskline_core::Date;
use riskline_curves::prelude::*;

/// Keeps every record emitted under the treasury log target.
struct TreasuryLog {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for TreasuryLog {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.target() == "riskline::treasury"
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            if let Ok(mut records) = self.records.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }
    }

    fn flush(&self) {}
}

static TREASURY_LOG: TreasuryLog = TreasuryLog {
    records: Mutex::new(Vec::new()),
};

fn capture_treasury_log() {
    // Tests share one process-wide logger; only the first install succeeds
    let _ = log::set_logger(&TREASURY_LOG);
    log::set_max_level(LevelFilter::Trace);
}

fn logged_warnings_for(end_date: Date) -> Vec<String> {
    let needle = format!("end date = {end_date} ");
    TREASURY_LOG
        .records
        .lock()
        .map(|records| {
            records
                .iter()
                .filter(|(level, message)| *level == Level::Warn && message.contains(&needle))
                .map(|(_, message)| message.clone())
                .collect()
        })
        .unwrap_or_default()
}

fn d(y: i32, m: u32, day: u32) -> Date {
    Date::from_ymd(y, m, day).unwrap()
}

fn snapshot(m1: Option<f64>, m3: f64, m6: f64, y1: f64, y30: f64) -> CurveSnapshot {
    let mut snap = CurveSnapshot::new()
        .with_rate(TreasuryDuration::M3, m3)
        .with_rate(TreasuryDuration::M6, m6)
        .with_rate(TreasuryDuration::Y1, y1)
        .with_rate(TreasuryDuration::Y30, y30);
    snap.set(TreasuryDuration::M1, m1);
    snap
}

fn history() -> TreasuryCurves {
    TreasuryCurves::new()
        .with_snapshot(d(2013, 6, 26), snapshot(Some(0.0003), 0.0005, 0.0010, 0.0014, 0.0352))
        .with_snapshot(d(2013, 6, 27), snapshot(Some(0.0002), 0.0004, 0.0010, 0.0014, 0.0350))
        .with_snapshot(d(2013, 6, 28), snapshot(None, 0.0004, 0.0010, 0.0015, 0.0352))
        .with_snapshot(d(2013, 7, 1), snapshot(Some(0.0002), 0.0003, 0.0009, 0.0014, 0.0350))
        .with_snapshot(d(2013, 7, 2), CurveSnapshot::new())
        .with_snapshot(d(2013, 7, 3), snapshot(Some(0.0002), 0.0004, 0.0009, 0.0014, 0.0354))
        .with_snapshot(d(2013, 7, 5), snapshot(Some(0.0003), 0.0004, 0.0009, 0.0016, 0.0368))
}

#[test]
fn test_exact_entry_is_pro_rated() {
    let curves = history();
    let resolver = TreasuryRateResolver::new(&curves, &WeekendCalendar);

    let start = d(2013, 6, 1);
    let end = d(2013, 6, 27);
    let days = end - start;

    let r = resolver.resolve(start, end).unwrap();
    assert_eq!(r, 0.0002 * (days + 1) as f64 / 365.0);
}

#[test]
fn test_missing_duration_escalates_to_next_longer() {
    let curves = history();
    let resolver = TreasuryRateResolver::new(&curves, &WeekendCalendar);

    let start = d(2013, 6, 1);
    let end = d(2013, 6, 28);
    let rate = resolver.lookup(start, end).unwrap();

    assert_eq!(rate.requested_duration, TreasuryDuration::M1);
    assert_eq!(rate.source_duration, TreasuryDuration::M3);
    assert_eq!(rate.source_date, end);
    assert!(!rate.is_stale());
    assert_relative_eq!(rate.period_return, 0.0004 * 28.0 / 365.0);
}

#[test]
fn test_escalation_skips_gaps_in_the_chain() {
    let curves = TreasuryCurves::new().with_snapshot(
        d(2013, 6, 28),
        CurveSnapshot::new()
            .without_rate(TreasuryDuration::M6)
            .without_rate(TreasuryDuration::Y1)
            .with_rate(TreasuryDuration::Y5, 0.0141),
    );
    let resolver = TreasuryRateResolver::new(&curves, &WeekendCalendar);

    // 178 elapsed days selects the 6-month bill
    let rate = resolver.lookup(d(2013, 1, 1), d(2013, 6, 28)).unwrap();
    assert_eq!(rate.requested_duration, TreasuryDuration::M6);
    assert_eq!(rate.source_duration, TreasuryDuration::Y5);
}

#[test]
fn test_blank_date_regresses_to_previous_date() {
    capture_treasury_log();
    let curves = history();
    let resolver = TreasuryRateResolver::new(&curves, &WeekendCalendar);

    let rate = resolver.lookup(d(2013, 6, 3), d(2013, 7, 2)).unwrap();
    assert_eq!(rate.source_date, d(2013, 7, 1));
    assert_eq!(rate.source_duration, TreasuryDuration::M1);
    // One trading day back is close enough
    assert!(!rate.is_stale());
    assert!(logged_warnings_for(d(2013, 7, 2)).is_empty());
}

#[test]
fn test_regression_two_days_back_warns() {
    capture_treasury_log();
    let mut curves = history();
    // Wednesday 2013-06-26 stays; Thursday and Friday are removed
    curves.remove(d(2013, 6, 27));
    curves.remove(d(2013, 6, 28));
    let resolver = TreasuryRateResolver::new(&curves, &WeekendCalendar);

    let start = d(2013, 6, 1);
    let end = d(2013, 6, 28);
    let rate = resolver.lookup(start, end).unwrap();

    assert_eq!(rate.source_date, d(2013, 6, 26));
    assert_relative_eq!(rate.period_return, 0.0003 * 28.0 / 365.0);

    let warning = rate.stale.expect("two trading days back should warn");
    assert_eq!(warning.trading_days, Some(2));
    assert_eq!(warning.source_date, d(2013, 6, 26));
    assert_eq!(warning.end_date, end);

    let logged = logged_warnings_for(end);
    assert_eq!(logged, vec![warning.to_string()]);
    assert!(logged[0].contains("Using 2013-06-26"));
}

#[test]
fn test_unknown_distance_warns() {
    let curves = history();
    // The calendar does not know 2013-07-04, so the distance is undetermined
    let calendar = SessionCalendar::new(
        "partial",
        vec![d(2013, 7, 1), d(2013, 7, 2), d(2013, 7, 3), d(2013, 7, 5)],
    );
    let resolver = TreasuryRateResolver::new(&curves, &calendar);

    let rate = resolver.lookup(d(2013, 6, 5), d(2013, 7, 4)).unwrap();
    assert_eq!(rate.source_date, d(2013, 7, 3));
    let warning = rate.stale.expect("undetermined distance should warn");
    assert_eq!(warning.trading_days, None);
}

#[test]
fn test_holiday_gap_depends_on_calendar() {
    let mut curves = history();
    curves.insert(d(2013, 7, 5), CurveSnapshot::new());

    // By weekdays alone, 07-03 is two trading days before 07-05
    let weekdays = TreasuryRateResolver::new(&curves, &WeekendCalendar);
    let rate = weekdays.lookup(d(2013, 6, 6), d(2013, 7, 5)).unwrap();
    assert_eq!(rate.source_date, d(2013, 7, 3));
    assert!(rate.is_stale());

    // With July 4th closed they are adjacent sessions
    let nyse = SessionCalendar::new(
        "NYSE",
        vec![d(2013, 7, 1), d(2013, 7, 2), d(2013, 7, 3), d(2013, 7, 5)],
    );
    let sessions = TreasuryRateResolver::new(&curves, &nyse);
    let rate = sessions.lookup(d(2013, 6, 6), d(2013, 7, 5)).unwrap();
    assert_eq!(rate.source_date, d(2013, 7, 3));
    assert!(!rate.is_stale());
}

#[test]
fn test_empty_table_is_unavailable() {
    let curves = TreasuryCurves::new();
    let resolver = TreasuryRateResolver::new(&curves, &WeekendCalendar);

    let err = resolver.resolve(d(2013, 1, 1), d(2013, 12, 31)).unwrap_err();
    assert_eq!(
        err,
        CurveError::TreasuryDataUnavailable {
            end_date: d(2013, 12, 31),
            duration: TreasuryDuration::Y1,
        }
    );
}

#[test]
fn test_all_blank_table_is_unavailable() {
    let curves: TreasuryCurves = (1..=20)
        .map(|day| {
            let mut snap = CurveSnapshot::new();
            for duration in TreasuryDuration::ALL {
                snap.set(duration, None);
            }
            (d(2013, 5, day), snap)
        })
        .collect();
    let resolver = TreasuryRateResolver::new(&curves, &WeekendCalendar);

    let err = resolver.lookup(d(2013, 5, 1), d(2013, 5, 20)).unwrap_err();
    assert!(matches!(err, CurveError::TreasuryDataUnavailable { .. }));
}

#[test]
fn test_later_dates_are_never_used() {
    let curves = TreasuryCurves::new().with_snapshot(
        d(2013, 7, 5),
        CurveSnapshot::new().with_rate(TreasuryDuration::M1, 0.0003),
    );
    let resolver = TreasuryRateResolver::new(&curves, &WeekendCalendar);

    assert!(resolver.resolve(d(2013, 6, 1), d(2013, 6, 30)).is_err());
}

#[test]
fn test_long_holding_period_uses_long_bond() {
    let curves = history();
    let resolver = TreasuryRateResolver::new(&curves, &WeekendCalendar);

    // Eleven years selects the 30-year bond
    let start = d(2002, 7, 1);
    let end = d(2013, 7, 1);
    let rate = resolver.lookup(start, end).unwrap();
    assert_eq!(rate.requested_duration, TreasuryDuration::Y30);
    assert_relative_eq!(rate.period_return, 0.0350 * ((end - start) + 1) as f64 / 365.0);
}
