//! # Riskline Core
//!
//! Core types and abstractions for the Riskline risk reporting library.
//!
//! This crate provides the foundational building blocks used throughout Riskline:
//!
//! - **Types**: `Date` with calendar-month arithmetic, `DailyReturn` and `ReturnSeries`
//! - **Trading Calendars**: the `TradingCalendar` lookup contract plus weekday and
//!   session-list implementations
//!
//! ## Example
//!
//! ```rust
//! use riskline_core::prelude::*;
//!
//! let series = ReturnSeries::new(vec![
//!     DailyReturn::new(Date::from_ymd(2024, 1, 2).unwrap(), 0.01),
//!     DailyReturn::new(Date::from_ymd(2024, 1, 3).unwrap(), -0.005),
//! ])
//! .unwrap();
//!
//! assert_eq!(series.first_date(), Some(Date::from_ymd(2024, 1, 2).unwrap()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

pub mod calendars;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{SessionCalendar, TradingCalendar, WeekendCalendar};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{DailyReturn, Date, ReturnSeries};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{DailyReturn, Date, ReturnSeries};
