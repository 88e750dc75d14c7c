//! Forecast accuracy metrics.

use crate::error::{Result, StockcastError};

/// Mean squared error between actual and predicted values.
pub fn mse(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    if actual.is_empty() {
        return Err(StockcastError::InsufficientData { needed: 1, got: 0 });
    }
    if actual.len() != predicted.len() {
        return Err(StockcastError::DimensionMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();
    Ok(sum / actual.len() as f64)
}

/// Root mean squared error between actual and predicted values.
pub fn rmse(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    Ok(mse(actual, predicted)?.sqrt())
}
