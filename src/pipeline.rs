//! End-to-end forecasting pipeline: load → smooth → difference → scale →
//! evaluate → forecast → inverse-scale.

use crate::core::{DailySeries, ForecastSeries};
use crate::data::{MarketData, DEFAULT_START};
use crate::error::{Result, StockcastError};
use crate::model::{Arima, ArimaSpec, Forecaster};
use crate::stationarity::{differencing_order, DEFAULT_MAX_DIFFERENCING};
use crate::transform::{rolling_mean_series, standardize};
use crate::utils::metrics::rmse;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

/// Confidence level for forecast prediction intervals.
const INTERVAL_LEVEL: f64 = 0.95;

/// Tunable pipeline parameters. The AR/MA orders are deliberately
/// configuration rather than constants; the dashboard default of 30/30
/// trades fit time for autocorrelation reach.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// First date of fetched history.
    pub start_date: NaiveDate,
    /// Trailing rolling-mean window over closes.
    pub smoothing_window: usize,
    /// Forecast steps, and the held-out tail length for evaluation.
    pub horizon: usize,
    /// Autoregressive order of the ARIMA fit.
    pub ar_order: usize,
    /// Moving-average order of the ARIMA fit.
    pub ma_order: usize,
    /// Significance level for the unit-root test loop.
    pub significance: f64,
    /// Cap on the differencing loop.
    pub max_differencing: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            start_date: DEFAULT_START,
            smoothing_window: 7,
            horizon: 30,
            ar_order: 30,
            ma_order: 30,
            significance: 0.05,
            max_differencing: DEFAULT_MAX_DIFFERENCING,
        }
    }
}

/// Everything a dashboard needs from one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub ticker: String,
    /// Held-out RMSE of the evaluation fit, in standardized units.
    pub rmse: f64,
    /// Differencing order the stationarity loop settled on.
    pub differencing_order: usize,
    /// 30-day forecast in price space.
    pub forecast: ForecastSeries,
    /// Smoothed history followed by the forecast, for charting.
    pub combined: DailySeries,
}

/// Orchestrates one forecast run per call. Carries no state between runs;
/// every run constructs its own scaler and model instances, so concurrent
/// pipelines over the same provider do not share fitted parameters.
pub struct ForecastPipeline<M> {
    provider: M,
    config: PipelineConfig,
}

impl<M: MarketData> ForecastPipeline<M> {
    pub fn new(provider: M) -> Self {
        Self {
            provider,
            config: PipelineConfig::default(),
        }
    }

    pub fn with_config(provider: M, config: PipelineConfig) -> Result<Self> {
        if config.smoothing_window == 0 {
            return Err(StockcastError::InvalidParameter(
                "smoothing_window must be positive".to_string(),
            ));
        }
        if config.horizon == 0 {
            return Err(StockcastError::InvalidParameter(
                "horizon must be positive".to_string(),
            ));
        }
        Ok(Self { provider, config })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn provider(&self) -> &M {
        &self.provider
    }

    /// Run the full pipeline for one ticker.
    pub fn run(&self, ticker: &str) -> Result<PipelineReport> {
        let history = self.provider.daily_history(ticker, self.config.start_date)?;
        info!(ticker, bars = history.len(), "pipeline start");

        let closes = history.close_series();
        let smoothed = rolling_mean_series(&closes, self.config.smoothing_window)?;
        let smoothed_values = smoothed.values();

        let d = differencing_order(
            &smoothed_values,
            self.config.significance,
            self.config.max_differencing,
        )?;
        debug!(d, "differencing order determined");

        let scaled = standardize(&smoothed_values)?;

        let rmse_score = self.evaluate(scaled.values(), d)?;
        info!(rmse = rmse_score, "held-out evaluation complete");

        // Refit on the whole series for the production forecast.
        let mut model = self.model(d);
        model.fit(scaled.values())?;
        let (point, lower, upper) =
            model.predict_with_intervals(self.config.horizon, INTERVAL_LEVEL)?;

        let anchor = smoothed
            .last_date()
            .ok_or(StockcastError::InsufficientData { needed: 1, got: 0 })?;
        let mut forecast = ForecastSeries::from_anchor(anchor, point).with_intervals(lower, upper)?;
        forecast.map_values(|v| scaled.invert_value(v));

        let combined = forecast.append_to(&smoothed)?;
        info!(
            ticker,
            horizon = self.config.horizon,
            "forecast complete"
        );

        Ok(PipelineReport {
            ticker: ticker.to_string(),
            rmse: rmse_score,
            differencing_order: d,
            forecast,
            combined,
        })
    }

    fn model(&self, d: usize) -> Arima {
        Arima::with_spec(ArimaSpec::new(self.config.ar_order, d, self.config.ma_order))
    }

    /// Fit on all-but-last-`horizon` points and score the forecast against
    /// the held-out tail.
    fn evaluate(&self, scaled: &[f64], d: usize) -> Result<f64> {
        let horizon = self.config.horizon;
        if scaled.len() <= horizon {
            return Err(StockcastError::InsufficientData {
                needed: horizon + 1,
                got: scaled.len(),
            });
        }

        let (train, test) = scaled.split_at(scaled.len() - horizon);
        let mut model = self.model(d);
        model.fit(train)?;
        let predictions = model.predict(horizon)?;
        rmse(test, &predictions)
    }
}
