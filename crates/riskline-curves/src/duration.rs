//! Treasury durations and holding-period duration selection.

use riskline_core::Date;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CurveError;

/// Canonical treasury maturity bucket.
///
/// Variants are declared shortest to longest, so the derived ordering is the
/// tenor ordering used for duration escalation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TreasuryDuration {
    /// 1 Month
    #[serde(rename = "1month")]
    M1,
    /// 3 Months
    #[serde(rename = "3month")]
    M3,
    /// 6 Months
    #[serde(rename = "6month")]
    M6,
    /// 1 Year
    #[serde(rename = "1year")]
    Y1,
    /// 2 Years
    #[serde(rename = "2year")]
    Y2,
    /// 3 Years
    #[serde(rename = "3year")]
    Y3,
    /// 5 Years
    #[serde(rename = "5year")]
    Y5,
    /// 7 Years
    #[serde(rename = "7year")]
    Y7,
    /// 10 Years
    #[serde(rename = "10year")]
    Y10,
    /// 30 Years
    #[serde(rename = "30year")]
    Y30,
}

impl TreasuryDuration {
    /// All durations, shortest to longest.
    pub const ALL: [TreasuryDuration; 10] = [
        TreasuryDuration::M1,
        TreasuryDuration::M3,
        TreasuryDuration::M6,
        TreasuryDuration::Y1,
        TreasuryDuration::Y2,
        TreasuryDuration::Y3,
        TreasuryDuration::Y5,
        TreasuryDuration::Y7,
        TreasuryDuration::Y10,
        TreasuryDuration::Y30,
    ];

    /// Returns the position of this duration in [`TreasuryDuration::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns this duration followed by every longer one, in escalation order.
    #[must_use]
    pub fn longer_or_equal(self) -> &'static [TreasuryDuration] {
        &Self::ALL[self.index()..]
    }

    /// Returns the tenor in months.
    #[must_use]
    pub fn months(self) -> u32 {
        match self {
            TreasuryDuration::M1 => 1,
            TreasuryDuration::M3 => 3,
            TreasuryDuration::M6 => 6,
            TreasuryDuration::Y1 => 12,
            TreasuryDuration::Y2 => 24,
            TreasuryDuration::Y3 => 36,
            TreasuryDuration::Y5 => 60,
            TreasuryDuration::Y7 => 84,
            TreasuryDuration::Y10 => 120,
            TreasuryDuration::Y30 => 360,
        }
    }

    /// Returns the curve label (e.g. `"3month"`, `"10year"`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TreasuryDuration::M1 => "1month",
            TreasuryDuration::M3 => "3month",
            TreasuryDuration::M6 => "6month",
            TreasuryDuration::Y1 => "1year",
            TreasuryDuration::Y2 => "2year",
            TreasuryDuration::Y3 => "3year",
            TreasuryDuration::Y5 => "5year",
            TreasuryDuration::Y7 => "7year",
            TreasuryDuration::Y10 => "10year",
            TreasuryDuration::Y30 => "30year",
        }
    }

    /// Parses a curve label. Also accepts short forms like `"3M"` or `"10Y"`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "1month" | "1m" => Some(TreasuryDuration::M1),
            "3month" | "3m" => Some(TreasuryDuration::M3),
            "6month" | "6m" => Some(TreasuryDuration::M6),
            "1year" | "1y" | "12m" => Some(TreasuryDuration::Y1),
            "2year" | "2y" => Some(TreasuryDuration::Y2),
            "3year" | "3y" => Some(TreasuryDuration::Y3),
            "5year" | "5y" => Some(TreasuryDuration::Y5),
            "7year" | "7y" => Some(TreasuryDuration::Y7),
            "10year" | "10y" => Some(TreasuryDuration::Y10),
            "30year" | "30y" => Some(TreasuryDuration::Y30),
            _ => None,
        }
    }
}

impl fmt::Display for TreasuryDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TreasuryDuration {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CurveError::unknown_duration(s))
    }
}

/// Upper bounds (inclusive, in elapsed days) for each duration except the last.
const DURATION_DAY_LIMITS: [(i64, TreasuryDuration); 9] = [
    (31, TreasuryDuration::M1),
    (93, TreasuryDuration::M3),
    (186, TreasuryDuration::M6),
    (366, TreasuryDuration::Y1),
    (365 * 2 + 1, TreasuryDuration::Y2),
    (365 * 3 + 1, TreasuryDuration::Y3),
    (365 * 5 + 2, TreasuryDuration::Y5),
    (365 * 7 + 2, TreasuryDuration::Y7),
    (365 * 10 + 2, TreasuryDuration::Y10),
];

/// Selects the treasury duration matching a holding period.
///
/// Total over all inputs: a period longer than ten years maps to 30 years,
/// and an inverted period maps to 1 month.
///
/// # Example
///
/// ```rust
/// use riskline_core::Date;
/// use riskline_curves::{select_duration, TreasuryDuration};
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 3, 31).unwrap();
/// assert_eq!(select_duration(start, end), TreasuryDuration::M3);
/// ```
#[must_use]
pub fn select_duration(start_date: Date, end_date: Date) -> TreasuryDuration {
    duration_for_days(end_date - start_date)
}

/// Selects the treasury duration for an elapsed day count.
#[must_use]
pub fn duration_for_days(days: i64) -> TreasuryDuration {
    DURATION_DAY_LIMITS
        .iter()
        .find(|(limit, _)| days <= *limit)
        .map_or(TreasuryDuration::Y30, |(_, duration)| *duration)
}
