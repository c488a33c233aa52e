//! Property-based tests for duration selection and rate resolution.
//!
//! These tests verify invariants that should hold for any input:
//! - Duration selection is monotonic in the holding period length
//! - Resolved rates never come from after the end date
//! - An exact entry always resolves to its own pro-rated rate

use proptest::prelude::*;
use riskline_core::calendars::WeekendCalendar;
use riskline_core::Date;
use riskline_curves::prelude::*;
use riskline_curves::{duration_for_days, pro_rate};

fn base() -> Date {
    Date::from_ymd(2000, 1, 1).unwrap()
}

proptest! {
    #[test]
    fn duration_selection_is_monotonic(a in -400i64..15_000, b in -400i64..15_000) {
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(duration_for_days(short).index() <= duration_for_days(long).index());
    }

    #[test]
    fn select_duration_matches_day_count(offset in 0i64..8_000, days in 0i64..12_000) {
        let start = base().add_days(offset);
        let end = start.add_days(days);
        prop_assert_eq!(select_duration(start, end), duration_for_days(days));
    }

    #[test]
    fn exact_entry_resolves_pro_rated(days in 0i64..12_000, rate in 0.0001f64..0.2) {
        let start = base();
        let end = start.add_days(days);
        let duration = select_duration(start, end);
        let curves = TreasuryCurves::new()
            .with_snapshot(end, CurveSnapshot::new().with_rate(duration, rate));
        let resolver = TreasuryRateResolver::new(&curves, &WeekendCalendar);

        let resolved = resolver.resolve(start, end).unwrap();
        prop_assert_eq!(resolved, pro_rate(rate, days));
        prop_assert_eq!(resolved, rate * (days + 1) as f64 / 365.0);
    }

    #[test]
    fn source_date_never_after_end(
        curve_offsets in proptest::collection::btree_set(0i64..120, 1..30),
        end_offset in 0i64..150,
    ) {
        let curves: TreasuryCurves = curve_offsets
            .iter()
            .map(|&o| {
                (
                    base().add_days(o),
                    CurveSnapshot::new().with_rate(TreasuryDuration::Y30, 0.03),
                )
            })
            .collect();
        let resolver = TreasuryRateResolver::new(&curves, &WeekendCalendar);
        let end = base().add_days(end_offset);

        match resolver.lookup(base(), end) {
            Ok(rate) => {
                prop_assert!(rate.source_date <= end);
                prop_assert_eq!(Some(rate.source_date), curves.last_on_or_before(end).map(|(d, _)| d));
            }
            Err(err) => {
                prop_assert!(curves.last_on_or_before(end).is_none());
                let is_unavailable = matches!(err, CurveError::TreasuryDataUnavailable { .. });
                prop_assert!(is_unavailable);
            }
        }
    }
}
