//! # Riskline Analytics
//!
//! Rolling-window risk statistics for a daily return series, measured
//! against treasury rates and an optional market benchmark.
//!
//! This crate provides:
//!
//! - **Ratios**: Sharpe, Sortino, information ratio and Jensen's alpha
//! - **Statistics**: compounded returns, annualized volatility, beta and
//!   maximum drawdown
//! - **Rolling Periods**: calendar-aligned windows at one-month stride
//! - **Period Metrics**: a pluggable per-window calculator with a standard
//!   implementation
//! - **Risk Report**: 1, 3, 6 and 12-month windows with a JSON-ready export
//!
//! ## Quick Start
//!
//! ```rust
//! use riskline_analytics::prelude::*;
//! use riskline_core::calendars::WeekendCalendar;
//! use riskline_core::{Date, ReturnSeries};
//! use riskline_curves::{CurveSnapshot, TreasuryCurves, TreasuryDuration, TreasuryRateResolver};
//!
//! let d = |m, day| Date::from_ymd(2024, m, day).unwrap();
//!
//! let curves = TreasuryCurves::new()
//!     .with_snapshot(d(1, 31), CurveSnapshot::new().with_rate(TreasuryDuration::M1, 0.053))
//!     .with_snapshot(d(2, 29), CurveSnapshot::new().with_rate(TreasuryDuration::M1, 0.054));
//!
//! let returns = ReturnSeries::from_pairs([
//!     (d(1, 2), 0.004),
//!     (d(1, 3), -0.002),
//!     (d(2, 1), 0.003),
//!     (d(2, 2), 0.001),
//! ])
//! .unwrap();
//!
//! let resolver = TreasuryRateResolver::new(&curves, &WeekendCalendar);
//! let calculator = StandardPeriodMetrics::new(resolver);
//! let params = SimulationParameters::new(d(1, 1), d(2, 29)).unwrap();
//!
//! let report = RiskReport::new(&returns, &params, None, &calculator).unwrap();
//! assert_eq!(report.month_periods().len(), 2);
//!
//! let export = report.to_dict().to_json();
//! assert_eq!(export["one_month"][0]["period_label"], "2024-01");
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: compute windows with rayon above
//!   [`RiskConfig::parallel_threshold`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod parallel;
pub mod periods;
pub mod ratios;
pub mod report;
pub mod stats;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::RiskConfig;
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::metrics::{PeriodMetrics, PeriodMetricsCalculator, StandardPeriodMetrics};
    pub use crate::periods::{periods_in_range, RollingPeriod, RollingPeriods};
    pub use crate::ratios::{alpha, information_ratio, sharpe_ratio, sortino_ratio};
    pub use crate::report::{RiskReport, RiskReportResult, SimulationParameters};
}

pub use config::RiskConfig;
pub use error::{AnalyticsError, AnalyticsResult};
pub use metrics::{
    scrub_non_finite, MetricValue, PeriodMetrics, PeriodMetricsCalculator, StandardPeriodMetrics,
    SCRUB_EXEMPT,
};
pub use parallel::{maybe_parallel_map, try_maybe_parallel_map};
pub use periods::{periods_in_range, RollingPeriod, RollingPeriods};
pub use ratios::{alpha, information_ratio, sharpe_ratio, sortino_ratio, tolerant_equals};
pub use report::{RiskReport, RiskReportResult, SimulationParameters, WINDOW_MONTHS};
