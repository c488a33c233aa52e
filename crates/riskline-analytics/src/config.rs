//! Configuration for risk report computation.

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Configuration for risk report computation.
///
/// Controls parallelism and annualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum window count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,

    /// Trading days per year used to annualize daily volatility.
    pub trading_days_per_year: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 24,
            trading_days_per_year: 252.0,
        }
    }
}

impl RiskConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Parses a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::Config` if the JSON is malformed or the
    /// resulting config fails [`RiskConfig::validate`].
    pub fn from_json_str(json: &str) -> AnalyticsResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AnalyticsError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Sets the annualization factor.
    #[must_use]
    pub fn with_trading_days_per_year(mut self, days: f64) -> Self {
        self.trading_days_per_year = days;
        self
    }

    /// Checks that the config values are usable.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::Config` if `trading_days_per_year` is not a
    /// positive finite number.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if !self.trading_days_per_year.is_finite() || self.trading_days_per_year <= 0.0 {
            return Err(AnalyticsError::config(format!(
                "trading_days_per_year must be positive, got {}",
                self.trading_days_per_year
            )));
        }
        Ok(())
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}
