//! Trailing rolling-window smoothing.

use crate::core::DailySeries;
use crate::error::{Result, StockcastError};

/// Compute a trailing rolling mean, dropping the leading incomplete
/// windows: the output is `window - 1` entries shorter than the input.
pub fn rolling_mean(series: &[f64], window: usize) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(StockcastError::InvalidParameter(
            "window must be positive".to_string(),
        ));
    }
    if series.len() < window {
        return Err(StockcastError::InsufficientData {
            needed: window,
            got: series.len(),
        });
    }

    // Running sum with per-step correction keeps this O(n).
    let mut result = Vec::with_capacity(series.len() - window + 1);
    let mut sum: f64 = series[..window].iter().sum();
    result.push(sum / window as f64);
    for i in window..series.len() {
        sum += series[i] - series[i - window];
        result.push(sum / window as f64);
    }
    Ok(result)
}

/// Rolling mean over a dated series, keeping the surviving dates aligned
/// with their window means.
pub fn rolling_mean_series(series: &DailySeries, window: usize) -> Result<DailySeries> {
    let smoothed = rolling_mean(&series.values(), window)?;
    let points = series
        .points()
        .iter()
        .skip(window - 1)
        .map(|(d, _)| *d)
        .zip(smoothed)
        .collect();
    DailySeries::new(points)
}
