//! Per-window risk metrics.
//!
//! [`PeriodMetricsCalculator`] is the seam between the report and whatever
//! computes a window's statistics. [`StandardPeriodMetrics`] is the stock
//! implementation: compounded returns, annualized volatility, beta, drawdown
//! and the risk-adjusted ratios against the resolved treasury rate.

use log::trace;
use riskline_core::{DailyReturn, Date};
use riskline_curves::TreasuryRateResolver;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::RiskConfig;
use crate::error::AnalyticsResult;
use crate::periods::RollingPeriod;
use crate::ratios::{alpha, information_ratio, sharpe_ratio, sortino_ratio};
use crate::stats;

/// Fields passed through unchanged by [`scrub_non_finite`].
pub const SCRUB_EXEMPT: &[&str] = &["period_label"];

/// Statistics for one rolling window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodMetrics {
    /// Number of algorithm returns in the window.
    pub trading_days: usize,
    /// Compounded algorithm return.
    pub algorithm_period_return: f64,
    /// Compounded benchmark return.
    pub benchmark_period_return: f64,
    /// Annualized benchmark volatility.
    pub benchmark_volatility: f64,
    /// Annualized algorithm volatility.
    pub algo_volatility: f64,
    /// Pro-rated risk-free return for the window.
    pub treasury_period_return: f64,
    /// Sharpe ratio.
    pub sharpe: f64,
    /// Sortino ratio, with the treasury return as the threshold.
    pub sortino: f64,
    /// Information ratio against the benchmark.
    pub information: f64,
    /// Beta against the benchmark.
    pub beta: f64,
    /// Jensen's alpha.
    pub alpha: f64,
    /// Algorithm return over the treasury return.
    pub excess_return: f64,
    /// Maximum drawdown, as a positive fraction.
    pub max_drawdown: f64,
    /// `YYYY-MM` of the window end.
    pub period_label: String,
    /// First day of the window.
    pub start_date: Date,
    /// Last day of the window.
    pub end_date: Date,
}

/// A metric value before export.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    /// A floating point statistic.
    Number(f64),
    /// A count.
    Count(usize),
    /// A label or date.
    Text(String),
}

impl From<MetricValue> for Value {
    fn from(value: MetricValue) -> Self {
        match value {
            MetricValue::Number(v) => Value::from(v),
            MetricValue::Count(n) => Value::from(n),
            MetricValue::Text(s) => Value::String(s),
        }
    }
}

impl PeriodMetrics {
    /// Returns the metrics as named values, in field order.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, MetricValue)> {
        use MetricValue::{Count, Number, Text};

        vec![
            ("trading_days", Count(self.trading_days)),
            ("algorithm_period_return", Number(self.algorithm_period_return)),
            ("benchmark_period_return", Number(self.benchmark_period_return)),
            ("benchmark_volatility", Number(self.benchmark_volatility)),
            ("algo_volatility", Number(self.algo_volatility)),
            ("treasury_period_return", Number(self.treasury_period_return)),
            ("sharpe", Number(self.sharpe)),
            ("sortino", Number(self.sortino)),
            ("information", Number(self.information)),
            ("beta", Number(self.beta)),
            ("alpha", Number(self.alpha)),
            ("excess_return", Number(self.excess_return)),
            ("max_drawdown", Number(self.max_drawdown)),
            ("period_label", Text(self.period_label.clone())),
            ("start_date", Text(self.start_date.to_string())),
            ("end_date", Text(self.end_date.to_string())),
        ]
    }

    /// Exports the metrics with NaN and infinite values replaced by `null`.
    #[must_use]
    pub fn to_entry(&self) -> Map<String, Value> {
        scrub_non_finite(self.entries(), SCRUB_EXEMPT)
    }
}

/// Builds an export map, replacing non-finite numbers with `null`.
///
/// Keys listed in `exempt` keep their value. JSON has no NaN or infinity,
/// so an exempt non-finite number is exported as its text form (`"NaN"`,
/// `"inf"`, `"-inf"`).
#[must_use]
pub fn scrub_non_finite<K, I>(entries: I, exempt: &[&str]) -> Map<String, Value>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, MetricValue)>,
{
    entries
        .into_iter()
        .map(|(key, value)| {
            let key = key.into();
            let value = match value {
                MetricValue::Number(v) if !v.is_finite() => {
                    if exempt.contains(&key.as_str()) {
                        Value::String(v.to_string())
                    } else {
                        Value::Null
                    }
                }
                other => Value::from(other),
            };
            (key, value)
        })
        .collect()
}

/// Computes the statistics for one rolling window.
///
/// Implementations must be shareable across threads; windows may be
/// computed in parallel.
pub trait PeriodMetricsCalculator: Sync {
    /// Computes the metrics for `period`.
    ///
    /// # Errors
    ///
    /// Returns an error if a required input, such as the risk-free rate,
    /// cannot be obtained. The report aborts on the first error.
    fn compute(&self, period: &RollingPeriod<'_>) -> AnalyticsResult<PeriodMetrics>;
}

/// Standard per-window metrics against a treasury curve history.
#[derive(Debug, Clone, Copy)]
pub struct StandardPeriodMetrics<'a> {
    resolver: TreasuryRateResolver<'a>,
    trading_days_per_year: f64,
}

impl<'a> StandardPeriodMetrics<'a> {
    /// Creates a calculator with the default annualization (252 days).
    #[must_use]
    pub fn new(resolver: TreasuryRateResolver<'a>) -> Self {
        Self::with_config(resolver, &RiskConfig::default())
    }

    /// Creates a calculator using the annualization from `config`.
    #[must_use]
    pub fn with_config(resolver: TreasuryRateResolver<'a>, config: &RiskConfig) -> Self {
        Self {
            resolver,
            trading_days_per_year: config.trading_days_per_year,
        }
    }

    /// Returns the treasury resolver.
    #[must_use]
    pub fn resolver(&self) -> TreasuryRateResolver<'a> {
        self.resolver
    }
}

impl PeriodMetricsCalculator for StandardPeriodMetrics<'_> {
    fn compute(&self, period: &RollingPeriod<'_>) -> AnalyticsResult<PeriodMetrics> {
        let algo = values(period.algorithm_returns());
        let bench = values(period.benchmark_returns());
        let (paired_algo, paired_bench) =
            join_by_date(period.algorithm_returns(), period.benchmark_returns());

        let treasury_period_return = self
            .resolver
            .resolve(period.start_date(), period.end_date())?;

        let algorithm_period_return = stats::period_return(&algo);
        let benchmark_period_return = stats::period_return(&bench);
        let algo_volatility = stats::annualized_volatility(&algo, self.trading_days_per_year);
        let benchmark_volatility = stats::annualized_volatility(&bench, self.trading_days_per_year);
        let beta = stats::beta(&paired_algo, &paired_bench);

        trace!(
            "{}-month window {}..{}: {} returns, {} paired",
            period.months(),
            period.start_date(),
            period.end_date(),
            algo.len(),
            paired_algo.len()
        );

        Ok(PeriodMetrics {
            trading_days: algo.len(),
            algorithm_period_return,
            benchmark_period_return,
            benchmark_volatility,
            algo_volatility,
            treasury_period_return,
            sharpe: sharpe_ratio(algo_volatility, algorithm_period_return, treasury_period_return),
            sortino: sortino_ratio(&algo, algorithm_period_return, treasury_period_return),
            information: information_ratio(&paired_algo, &paired_bench),
            beta,
            alpha: alpha(
                algorithm_period_return,
                treasury_period_return,
                benchmark_period_return,
                beta,
            ),
            excess_return: algorithm_period_return - treasury_period_return,
            max_drawdown: stats::max_drawdown(&algo),
            period_label: period.label(),
            start_date: period.start_date(),
            end_date: period.end_date(),
        })
    }
}

fn values(returns: &[DailyReturn]) -> Vec<f64> {
    returns.iter().map(|r| r.value).collect()
}

/// Pairs up returns observed on the same date. Both inputs are date-ordered.
fn join_by_date(algo: &[DailyReturn], bench: &[DailyReturn]) -> (Vec<f64>, Vec<f64>) {
    let mut paired_algo = Vec::with_capacity(algo.len().min(bench.len()));
    let mut paired_bench = Vec::with_capacity(paired_algo.capacity());

    let (mut i, mut j) = (0, 0);
    while i < algo.len() && j < bench.len() {
        match algo[i].date.cmp(&bench[j].date) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                paired_algo.push(algo[i].value);
                paired_bench.push(bench[j].value);
                i += 1;
                j += 1;
            }
        }
    }

    (paired_algo, paired_bench)
}
