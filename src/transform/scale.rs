//! Standardization with a retained, exactly invertible affine transform.

use crate::error::{Result, StockcastError};

/// A standardized series together with the affine parameters that produced
/// it. The parameters live only as long as one pipeline run; concurrent
/// runs each construct their own instance.
#[derive(Debug, Clone)]
pub struct ScaledSeries {
    values: Vec<f64>,
    mean: f64,
    scale: f64,
}

impl ScaledSeries {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Map a value from the standardized scale back to the original:
    /// `original = scaled * scale + mean`.
    pub fn invert_value(&self, scaled: f64) -> f64 {
        scaled * self.scale + self.mean
    }

    /// Map a slice from the standardized scale back to the original.
    pub fn invert(&self, scaled: &[f64]) -> Vec<f64> {
        scaled.iter().map(|&x| self.invert_value(x)).collect()
    }
}

/// Standardize a series to zero mean and unit variance, retaining the
/// affine `(mean, scale)` transform for exact inversion.
///
/// A constant series keeps scale 1.0 instead of dividing by a zero
/// standard deviation.
pub fn standardize(series: &[f64]) -> Result<ScaledSeries> {
    if series.is_empty() {
        return Err(StockcastError::InsufficientData { needed: 1, got: 0 });
    }

    let n = series.len() as f64;
    let mean = series.iter().sum::<f64>() / n;
    let variance = if series.len() > 1 {
        series.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)
    } else {
        0.0
    };
    let std = variance.sqrt();
    let scale = if std < 1e-10 { 1.0 } else { std };

    let values = series.iter().map(|&x| (x - mean) / scale).collect();
    Ok(ScaledSeries {
        values,
        mean,
        scale,
    })
}
