//! Forecasting models.

mod arima;

pub use arima::{Arima, ArimaSpec};

use crate::error::Result;

/// Common interface for forecasting models operating on a numeric series.
///
/// Models work in whatever scale the caller hands them (the pipeline fits
/// on the standardized series); date indexing is attached by the caller.
pub trait Forecaster {
    /// Fit the model to the series.
    fn fit(&mut self, series: &[f64]) -> Result<()>;

    /// Forecast `horizon` steps past the end of the fitted series.
    fn predict(&self, horizon: usize) -> Result<Vec<f64>>;

    /// Forecast with symmetric prediction intervals at `level`
    /// (e.g. 0.95). Returns `(point, lower, upper)`.
    fn predict_with_intervals(
        &self,
        horizon: usize,
        level: f64,
    ) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)> {
        let _ = level;
        let point = self.predict(horizon)?;
        let lower = point.clone();
        let upper = point.clone();
        Ok((point, lower, upper))
    }

    /// In-sample predictions, available after `fit`.
    fn fitted_values(&self) -> Option<&[f64]>;

    /// Residuals (actual minus fitted), available after `fit`.
    fn residuals(&self) -> Option<&[f64]>;

    /// Model name for logging.
    fn name(&self) -> &str;

    fn is_fitted(&self) -> bool {
        self.fitted_values().is_some()
    }
}
