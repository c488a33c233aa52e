//! # Riskline Curves
//!
//! Historical treasury curves and risk-free rate resolution for the Riskline
//! risk reporting library.
//!
//! This crate provides:
//!
//! - **Durations**: the ten canonical treasury maturities and the mapping from
//!   a holding period to the matching one
//! - **Curve Table**: date-ordered snapshots of optional rates per duration
//! - **Rate Resolution**: duration escalation and date regression over the
//!   table, with staleness reporting
//!
//! ## Quick Start
//!
//! ```rust
//! use riskline_core::calendars::WeekendCalendar;
//! use riskline_core::Date;
//! use riskline_curves::prelude::*;
//!
//! let curves = TreasuryCurves::new()
//!     .with_snapshot(
//!         Date::from_ymd(2013, 3, 27).unwrap(),
//!         CurveSnapshot::new().with_rate(TreasuryDuration::M3, 0.0009),
//!     );
//!
//! let resolver = TreasuryRateResolver::new(&curves, &WeekendCalendar);
//! let start = Date::from_ymd(2013, 1, 1).unwrap();
//! let end = Date::from_ymd(2013, 3, 29).unwrap();
//!
//! // 2013-03-29 has no curve, so the rate comes from two trading days earlier
//! let rate = resolver.lookup(start, end).unwrap();
//! assert_eq!(rate.source_date, Date::from_ymd(2013, 3, 27).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod duration;
pub mod error;
pub mod resolver;
pub mod table;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::duration::{select_duration, TreasuryDuration};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::resolver::{StaleRateWarning, TreasuryRate, TreasuryRateResolver};
    pub use crate::table::{CurveSnapshot, TreasuryCurves};
}

pub use duration::{duration_for_days, select_duration, TreasuryDuration};
pub use error::{CurveError, CurveResult};
pub use resolver::{pro_rate, StaleRateWarning, TreasuryRate, TreasuryRateResolver};
pub use table::{CurveSnapshot, TreasuryCurves};
