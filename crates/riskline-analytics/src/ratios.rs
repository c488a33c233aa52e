//! Risk-adjusted return ratios.
//!
//! Closed-form reductions over a window's returns. Degenerate denominators
//! (zero within tolerance) produce 0.0 instead of an infinite ratio.

use crate::stats::{mean, sample_std_dev};

/// Absolute tolerance used by [`tolerant_equals`].
pub const ABSOLUTE_TOLERANCE: f64 = 1e-6;

/// Relative tolerance used by [`tolerant_equals`].
pub const RELATIVE_TOLERANCE: f64 = 1e-6;

/// Approximate float equality: `|a - b| <= atol + rtol * |b|`.
#[must_use]
pub fn tolerant_equals(a: f64, b: f64) -> bool {
    (a - b).abs() <= ABSOLUTE_TOLERANCE + RELATIVE_TOLERANCE * b.abs()
}

/// Sharpe ratio for a period.
///
/// ## Formula
///
/// ```text
/// Sharpe = (R_algo - R_treasury) / σ_algo
/// ```
///
/// Returns 0.0 when the volatility is zero within tolerance.
///
/// # Example
///
/// ```rust
/// use riskline_analytics::sharpe_ratio;
///
/// assert_eq!(sharpe_ratio(0.0, 0.10, 0.02), 0.0);
/// assert!((sharpe_ratio(0.2, 0.10, 0.02) - 0.4).abs() < 1e-12);
/// ```
#[must_use]
pub fn sharpe_ratio(algorithm_volatility: f64, algorithm_return: f64, treasury_return: f64) -> f64 {
    if tolerant_equals(algorithm_volatility, 0.0) {
        return 0.0;
    }
    (algorithm_return - treasury_return) / algorithm_volatility
}

/// Sortino ratio for a period, penalizing only returns below `mar`.
///
/// ## Formula
///
/// ```text
/// DR      = sqrt( Σ_{r < MAR} (r - MAR)² / N )
/// Sortino = (R_period - MAR) / DR
/// ```
///
/// `N` is the total number of returns, not only those below the threshold.
/// Returns 0.0 for an empty window or when `DR` is zero within tolerance.
#[must_use]
pub fn sortino_ratio(returns: &[f64], period_return: f64, mar: f64) -> f64 {
    if returns.is_empty() {
        return 0.0;
    }

    let downside: f64 = returns
        .iter()
        .filter(|&&r| r < mar)
        .map(|r| (r - mar).powi(2))
        .sum();
    let dr = (downside / returns.len() as f64).sqrt();

    if tolerant_equals(dr, 0.0) {
        return 0.0;
    }
    (period_return - mar) / dr
}

/// Information ratio of the algorithm against a benchmark.
///
/// Uses the active return `algo[i] - benchmark[i]` over the common length.
/// Returns 0.0 when the tracking error is zero within tolerance, or undefined
/// because fewer than two points are available.
#[must_use]
pub fn information_ratio(algorithm_returns: &[f64], benchmark_returns: &[f64]) -> f64 {
    let active: Vec<f64> = algorithm_returns
        .iter()
        .zip(benchmark_returns)
        .map(|(a, b)| a - b)
        .collect();

    let tracking_error = sample_std_dev(&active);
    if tracking_error.is_nan() || tolerant_equals(tracking_error, 0.0) {
        return 0.0;
    }
    mean(&active) / tracking_error
}

/// Jensen's alpha for a period.
///
/// ```text
/// α = R_algo - (R_treasury + β · (R_bench - R_treasury))
/// ```
#[must_use]
pub fn alpha(
    algorithm_period_return: f64,
    treasury_period_return: f64,
    benchmark_period_return: f64,
    beta: f64,
) -> f64 {
    algorithm_period_return
        - (treasury_period_return + beta * (benchmark_period_return - treasury_period_return))
}
