//! Rolling risk report over 1, 3, 6 and 12-month windows.
//!
//! The report is computed eagerly at construction. Any window that cannot be
//! computed aborts the whole report; there is no partial result.

use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use riskline_core::{CoreError, CoreResult, Date, ReturnSeries};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::config::RiskConfig;
use crate::error::AnalyticsResult;
use crate::metrics::{PeriodMetrics, PeriodMetricsCalculator};
use crate::parallel::try_maybe_parallel_map;
use crate::periods::{periods_in_range, RollingPeriod};

/// Window lengths, in months, computed by every report.
pub const WINDOW_MONTHS: [u32; 4] = [1, 3, 6, 12];

/// Configured bounds of the simulation.
///
/// Used for the report range only when the return series is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// First simulated day.
    pub period_start: Date,
    /// Last simulated day.
    pub period_end: Date,
}

impl SimulationParameters {
    /// Creates simulation parameters.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPeriod` if `period_start` is after `period_end`.
    pub fn new(period_start: Date, period_end: Date) -> CoreResult<Self> {
        if period_start > period_end {
            return Err(CoreError::invalid_period(period_start, period_end));
        }
        Ok(Self {
            period_start,
            period_end,
        })
    }
}

/// Risk statistics for every rolling window of a return series.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskReport {
    created: DateTime<Utc>,
    start_date: Date,
    end_date: Date,
    month_periods: Vec<PeriodMetrics>,
    three_month_periods: Vec<PeriodMetrics>,
    six_month_periods: Vec<PeriodMetrics>,
    year_periods: Vec<PeriodMetrics>,
}

impl RiskReport {
    /// Builds a report with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `calculator`.
    pub fn new<C>(
        returns: &ReturnSeries,
        params: &SimulationParameters,
        benchmark: Option<&ReturnSeries>,
        calculator: &C,
    ) -> AnalyticsResult<Self>
    where
        C: PeriodMetricsCalculator + ?Sized,
    {
        Self::with_config(returns, params, benchmark, calculator, &RiskConfig::default())
    }

    /// Builds a report.
    ///
    /// The range is taken from the first and last return dates, or from
    /// `params` when `returns` is empty. Windows are computed in parallel
    /// when `config` allows it; output order is unaffected.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::Config` if `config` is invalid, or the first
    /// error raised by `calculator`.
    pub fn with_config<C>(
        returns: &ReturnSeries,
        params: &SimulationParameters,
        benchmark: Option<&ReturnSeries>,
        calculator: &C,
        config: &RiskConfig,
    ) -> AnalyticsResult<Self>
    where
        C: PeriodMetricsCalculator + ?Sized,
    {
        config.validate()?;
        let created = Utc::now();

        let (start_date, end_date) = match (returns.first_date(), returns.last_date()) {
            (Some(first), Some(last)) => (first, last),
            _ => (params.period_start, params.period_end),
        };

        let compute = |months: u32| -> AnalyticsResult<Vec<PeriodMetrics>> {
            let periods: Vec<RollingPeriod<'_>> =
                periods_in_range(months, start_date, end_date, returns, benchmark).collect();
            let metrics = try_maybe_parallel_map(&periods, config, |p| calculator.compute(p))?;
            debug!(
                "computed {} {}-month windows for {}..{}",
                metrics.len(),
                months,
                start_date,
                end_date
            );
            Ok(metrics)
        };

        let [one, three, six, twelve] = WINDOW_MONTHS;
        Ok(Self {
            created,
            start_date,
            end_date,
            month_periods: compute(one)?,
            three_month_periods: compute(three)?,
            six_month_periods: compute(six)?,
            year_periods: compute(twelve)?,
        })
    }

    /// When the report was built.
    #[must_use]
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// First day of the report range.
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Last day of the report range.
    #[must_use]
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// One-month windows.
    #[must_use]
    pub fn month_periods(&self) -> &[PeriodMetrics] {
        &self.month_periods
    }

    /// Three-month windows.
    #[must_use]
    pub fn three_month_periods(&self) -> &[PeriodMetrics] {
        &self.three_month_periods
    }

    /// Six-month windows.
    #[must_use]
    pub fn six_month_periods(&self) -> &[PeriodMetrics] {
        &self.six_month_periods
    }

    /// Twelve-month windows.
    #[must_use]
    pub fn year_periods(&self) -> &[PeriodMetrics] {
        &self.year_periods
    }

    /// Returns true if no window of any length was computed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.month_periods.is_empty()
            && self.three_month_periods.is_empty()
            && self.six_month_periods.is_empty()
            && self.year_periods.is_empty()
    }

    /// Exports the report with non-finite metrics scrubbed to `null`.
    #[must_use]
    pub fn to_dict(&self) -> RiskReportResult {
        let export = |periods: &[PeriodMetrics]| periods.iter().map(PeriodMetrics::to_entry).collect();
        RiskReportResult {
            one_month: export(&self.month_periods),
            three_month: export(&self.three_month_periods),
            six_month: export(&self.six_month_periods),
            twelve_month: export(&self.year_periods),
            created: self.created,
        }
    }
}

/// Exported form of a [`RiskReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReportResult {
    /// One-month window entries, in order.
    pub one_month: Vec<Map<String, Value>>,
    /// Three-month window entries, in order.
    pub three_month: Vec<Map<String, Value>>,
    /// Six-month window entries, in order.
    pub six_month: Vec<Map<String, Value>>,
    /// Twelve-month window entries, in order.
    pub twelve_month: Vec<Map<String, Value>>,
    /// When the report was built.
    pub created: DateTime<Utc>,
}

impl RiskReportResult {
    /// Converts the result to a JSON value.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "one_month": self.one_month,
            "three_month": self.three_month,
            "six_month": self.six_month,
            "twelve_month": self.twelve_month,
            "created": self.created.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyticsError;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    /// Reports each window's bounds and return count, without a rate lookup.
    struct CountingCalculator;

    impl PeriodMetricsCalculator for CountingCalculator {
        fn compute(&self, period: &RollingPeriod<'_>) -> AnalyticsResult<PeriodMetrics> {
            Ok(PeriodMetrics {
                trading_days: period.algorithm_returns().len(),
                algorithm_period_return: 0.0,
                benchmark_period_return: 0.0,
                benchmark_volatility: f64::NAN,
                algo_volatility: 0.0,
                treasury_period_return: 0.0,
                sharpe: 0.0,
                sortino: 0.0,
                information: 0.0,
                beta: 0.0,
                alpha: 0.0,
                excess_return: 0.0,
                max_drawdown: 0.0,
                period_label: period.label(),
                start_date: period.start_date(),
                end_date: period.end_date(),
            })
        }
    }

    struct FailingCalculator;

    impl PeriodMetricsCalculator for FailingCalculator {
        fn compute(&self, period: &RollingPeriod<'_>) -> AnalyticsResult<PeriodMetrics> {
            Err(AnalyticsError::invalid_input(format!(
                "no data for {}",
                period.label()
            )))
        }
    }

    #[test]
    fn test_simulation_parameters_validation() {
        assert!(SimulationParameters::new(d(2023, 1, 1), d(2023, 1, 1)).is_ok());
        assert_eq!(
            SimulationParameters::new(d(2023, 2, 1), d(2023, 1, 1)),
            Err(CoreError::invalid_period(d(2023, 2, 1), d(2023, 1, 1)))
        );
    }

    #[test]
    fn test_range_comes_from_returns() {
        let params = SimulationParameters::new(d(2020, 1, 1), d(2020, 12, 31)).unwrap();
        let returns =
            ReturnSeries::from_pairs([(d(2023, 1, 3), 0.01), (d(2023, 3, 30), 0.02)]).unwrap();

        let report = RiskReport::new(&returns, &params, None, &CountingCalculator).unwrap();
        assert_eq!(report.start_date(), d(2023, 1, 3));
        assert_eq!(report.end_date(), d(2023, 3, 30));
        assert_eq!(report.month_periods().len(), 3);
        assert_eq!(report.three_month_periods().len(), 1);
        assert!(report.six_month_periods().is_empty());
        assert!(report.year_periods().is_empty());
    }

    #[test]
    fn test_empty_returns_use_params() {
        let params = SimulationParameters::new(d(2020, 1, 1), d(2020, 12, 31)).unwrap();
        let report =
            RiskReport::new(&ReturnSeries::empty(), &params, None, &FailingCalculator).unwrap();

        assert_eq!(report.start_date(), d(2020, 1, 1));
        assert_eq!(report.end_date(), d(2020, 12, 31));
        assert!(report.is_empty());

        let result = report.to_dict();
        assert!(result.one_month.is_empty());
        assert!(result.twelve_month.is_empty());
    }

    #[test]
    fn test_calculator_error_aborts() {
        let params = SimulationParameters::new(d(2023, 1, 1), d(2023, 1, 31)).unwrap();
        let returns = ReturnSeries::from_pairs([(d(2023, 1, 3), 0.01)]).unwrap();

        let err = RiskReport::new(&returns, &params, None, &FailingCalculator).unwrap_err();
        assert_eq!(err, AnalyticsError::invalid_input("no data for 2023-01"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let params = SimulationParameters::new(d(2023, 1, 1), d(2023, 1, 31)).unwrap();
        let config = RiskConfig::new().with_trading_days_per_year(0.0);

        let err = RiskReport::with_config(
            &ReturnSeries::empty(),
            &params,
            None,
            &CountingCalculator,
            &config,
        )
        .unwrap_err();
        assert!(matches!(err, AnalyticsError::Config { .. }));
    }

    #[test]
    fn test_to_dict_scrubs_and_orders() {
        let params = SimulationParameters::new(d(2023, 1, 1), d(2023, 2, 28)).unwrap();
        let returns =
            ReturnSeries::from_pairs([(d(2023, 1, 3), 0.01), (d(2023, 2, 1), 0.02)]).unwrap();
        let report = RiskReport::new(&returns, &params, None, &CountingCalculator).unwrap();

        let result = report.to_dict();
        assert_eq!(result.created, report.created());
        assert_eq!(result.one_month.len(), 2);
        assert_eq!(result.one_month[0]["period_label"], Value::from("2023-01"));
        assert_eq!(result.one_month[1]["period_label"], Value::from("2023-02"));
        assert_eq!(result.one_month[0]["benchmark_volatility"], Value::Null);

        let json = result.to_json();
        assert_eq!(json["one_month"][1]["trading_days"], Value::from(1));
        assert!(json["created"].as_str().unwrap().ends_with('Z'));
        assert_eq!(json["three_month"], json!([]));
    }

    #[test]
    fn test_dyn_calculator() {
        let params = SimulationParameters::new(d(2023, 1, 1), d(2023, 1, 31)).unwrap();
        let returns = ReturnSeries::from_pairs([(d(2023, 1, 3), 0.01)]).unwrap();
        let calculator: &dyn PeriodMetricsCalculator = &CountingCalculator;

        let report = RiskReport::new(&returns, &params, None, calculator).unwrap();
        assert_eq!(report.month_periods().len(), 1);
    }
}
