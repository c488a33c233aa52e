//! Domain types for risk calculations.

mod date;
mod returns;

pub use date::Date;
pub use returns::{DailyReturn, ReturnSeries};
