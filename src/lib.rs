//! # stockcast
//!
//! Market-data retrieval and closing-price forecasting for a stock
//! dashboard. Fetches daily OHLCV history and fundamentals for a ticker,
//! computes descriptive analytics, and runs a classical forecasting
//! pipeline: rolling-mean smoothing, differencing-based stationarity
//! detection, standardization, an ARIMA fit with held-out RMSE evaluation,
//! and a 30-day projection mapped back to price scale.
//!
//! Chart rendering and page layout are external collaborators; this crate
//! returns data shaped for them.

pub mod analysis;
pub mod core;
pub mod data;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod stationarity;
pub mod transform;
pub mod utils;

pub use error::{Result, StockcastError};

pub mod prelude {
    pub use crate::core::{DailySeries, ForecastSeries, PriceBar, PriceSeries};
    pub use crate::data::{CompanyProfile, HttpMarketData, MarketData};
    pub use crate::error::{Result, StockcastError};
    pub use crate::model::{Arima, ArimaSpec, Forecaster};
    pub use crate::pipeline::{ForecastPipeline, PipelineConfig, PipelineReport};
}
