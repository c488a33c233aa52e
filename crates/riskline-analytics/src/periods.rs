//! Calendar-aligned rolling windows over a return series.
//!
//! Windows start on the first day of a month, end on the last day of a month
//! and advance one month at a time, so windows longer than a month overlap.

use std::iter::FusedIterator;

use log::debug;
use riskline_core::{DailyReturn, Date, ReturnSeries};

/// One rolling window over the full return series.
///
/// The window borrows the complete series; [`RollingPeriod::algorithm_returns`]
/// and [`RollingPeriod::benchmark_returns`] slice it to `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingPeriod<'a> {
    start_date: Date,
    end_date: Date,
    months: u32,
    returns: &'a ReturnSeries,
    benchmark: Option<&'a ReturnSeries>,
}

impl<'a> RollingPeriod<'a> {
    /// Creates a window spanning `[start_date, end_date]`.
    #[must_use]
    pub fn new(
        start_date: Date,
        end_date: Date,
        months: u32,
        returns: &'a ReturnSeries,
        benchmark: Option<&'a ReturnSeries>,
    ) -> Self {
        Self {
            start_date,
            end_date,
            months,
            returns,
            benchmark,
        }
    }

    /// First day of the window.
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Last day of the window.
    #[must_use]
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Window length in months.
    #[must_use]
    pub fn months(&self) -> u32 {
        self.months
    }

    /// `YYYY-MM` of the window end.
    #[must_use]
    pub fn label(&self) -> String {
        self.end_date.month_label()
    }

    /// The full algorithm return series.
    #[must_use]
    pub fn returns(&self) -> &'a ReturnSeries {
        self.returns
    }

    /// The full benchmark series, if any.
    #[must_use]
    pub fn benchmark(&self) -> Option<&'a ReturnSeries> {
        self.benchmark
    }

    /// Algorithm returns dated within the window.
    #[must_use]
    pub fn algorithm_returns(&self) -> &'a [DailyReturn] {
        self.returns.slice(self.start_date, self.end_date)
    }

    /// Benchmark returns dated within the window. Empty without a benchmark.
    #[must_use]
    pub fn benchmark_returns(&self) -> &'a [DailyReturn] {
        match self.benchmark {
            Some(benchmark) => benchmark.slice(self.start_date, self.end_date),
            None => &[],
        }
    }
}

/// Lazy sequence of rolling windows, in ascending start order.
///
/// Cloning the iterator restarts from the clone's position.
#[derive(Debug, Clone)]
pub struct RollingPeriods<'a> {
    months: u32,
    next_start: Option<Date>,
    the_end: Date,
    returns: &'a ReturnSeries,
    benchmark: Option<&'a ReturnSeries>,
}

impl<'a> Iterator for RollingPeriods<'a> {
    type Item = RollingPeriod<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next_start?;
        let months = i32::try_from(self.months).ok();

        let end = months.and_then(|m| start.add_months(m).ok()).map(|d| d - 1);
        match end {
            Some(end) if end <= self.the_end => {
                self.next_start = start.add_months(1).ok();
                Some(RollingPeriod::new(
                    start,
                    end,
                    self.months,
                    self.returns,
                    self.benchmark,
                ))
            }
            Some(_) => {
                self.next_start = None;
                None
            }
            None => {
                debug!(
                    "{}-month window from {} is outside the supported date range",
                    self.months, start
                );
                self.next_start = None;
                None
            }
        }
    }
}

impl FusedIterator for RollingPeriods<'_> {}

/// Decomposes `[start_date, end_date]` into `months_per_window`-month windows.
///
/// The first window starts on the first day of `start_date`'s month. Windows
/// advance by one month and stop before any would end after the last day of
/// `end_date`'s month. An empty return series or a zero window length yields
/// no windows. Every window carries the full series.
///
/// # Example
///
/// ```rust
/// use riskline_analytics::periods_in_range;
/// use riskline_core::{Date, ReturnSeries};
///
/// let d = |m, day| Date::from_ymd(2024, m, day).unwrap();
/// let returns = ReturnSeries::from_pairs([(d(1, 15), 0.01), (d(3, 28), -0.02)]).unwrap();
///
/// let windows: Vec<_> = periods_in_range(1, d(1, 15), d(3, 28), &returns, None).collect();
/// assert_eq!(windows.len(), 3);
/// assert_eq!(windows[0].start_date(), d(1, 1));
/// assert_eq!(windows[2].end_date(), d(3, 31));
/// ```
#[must_use]
pub fn periods_in_range<'a>(
    months_per_window: u32,
    start_date: Date,
    end_date: Date,
    returns: &'a ReturnSeries,
    benchmark: Option<&'a ReturnSeries>,
) -> RollingPeriods<'a> {
    let next_start = if returns.is_empty() || months_per_window == 0 {
        None
    } else {
        Some(start_date.start_of_month())
    };

    RollingPeriods {
        months: months_per_window,
        next_start,
        the_end: end_date.end_of_month(),
        returns,
        benchmark,
    }
}
