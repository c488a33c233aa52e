//! Descriptive statistics over daily return arrays.
//!
//! Sample statistics use Bessel's correction (ddof = 1). Functions that are
//! undefined for short inputs return NaN rather than an error; NaN values are
//! scrubbed to `null` when a report is exported.

/// Arithmetic mean. NaN for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance (ddof = 1). NaN for fewer than two values.
#[must_use]
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    ss / (values.len() - 1) as f64
}

/// Sample standard deviation (ddof = 1). NaN for fewer than two values.
#[must_use]
pub fn sample_std_dev(values: &[f64]) -> f64 {
    sample_variance(values).sqrt()
}

/// Sample covariance (ddof = 1) over the common prefix of `a` and `b`.
///
/// NaN when fewer than two pairs are available.
#[must_use]
pub fn sample_covariance(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n < 2 {
        return f64::NAN;
    }
    let (a, b) = (&a[..n], &b[..n]);
    let (ma, mb) = (mean(a), mean(b));
    let sum: f64 = a.iter().zip(b).map(|(x, y)| (x - ma) * (y - mb)).sum();
    sum / (n - 1) as f64
}

/// Compounded return over a window: `Π(1 + r) − 1`. Zero for an empty slice.
#[must_use]
pub fn period_return(returns: &[f64]) -> f64 {
    returns.iter().fold(1.0, |acc, r| acc * (1.0 + r)) - 1.0
}

/// Annualized volatility: sample standard deviation scaled by
/// `sqrt(periods_per_year)`.
#[must_use]
pub fn annualized_volatility(returns: &[f64], periods_per_year: f64) -> f64 {
    sample_std_dev(returns) * periods_per_year.sqrt()
}

/// Beta of `algo` against `benchmark`: `cov(algo, bench) / var(bench)`.
///
/// Returns 0.0 with fewer than two paired points. A flat benchmark yields a
/// non-finite ratio, left as is for the export scrub.
#[must_use]
pub fn beta(algo: &[f64], benchmark: &[f64]) -> f64 {
    let n = algo.len().min(benchmark.len());
    if n < 2 {
        return 0.0;
    }
    sample_covariance(&algo[..n], &benchmark[..n]) / sample_variance(&benchmark[..n])
}

/// Maximum drawdown of the compounded return path, as a positive fraction.
///
/// Works in log space: the deepest fall of cumulative `ln(1 + r)` below its
/// running peak is mapped back with `1 − exp(min)`. The running peak starts
/// at the first observation, so a window that opens with a loss does not
/// count that first loss. Zero for an empty slice.
#[must_use]
pub fn max_drawdown(returns: &[f64]) -> f64 {
    let mut cumulative = 0.0_f64;
    let mut peak = f64::NEG_INFINITY;
    let mut worst = 0.0_f64;

    for r in returns {
        cumulative += r.ln_1p();
        peak = peak.max(cumulative);
        worst = worst.min(cumulative - peak);
    }

    1.0 - worst.exp()
}
