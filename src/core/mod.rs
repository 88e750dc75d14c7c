//! Core data structures: price history and forecast series.

mod forecast;
mod price_series;

pub use forecast::ForecastSeries;
pub use price_series::{DailySeries, PriceBar, PriceSeries};
