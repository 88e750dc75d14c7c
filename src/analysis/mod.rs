//! Descriptive analytics: technical indicators and history summaries.

mod indicators;
mod summary;

pub use indicators::{ema, macd, rsi, sma, MacdSeries};
pub use summary::{clip_to_period, daily_change, DailyChange, Period};
