//! Forecast result structure for holding dated predictions.

use crate::core::DailySeries;
use crate::error::{Result, StockcastError};
use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// A forecast of daily values with contiguous calendar dates starting the
/// day after the anchor date (the last observed point of the fit).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ForecastSeries {
    anchor: Option<NaiveDate>,
    points: Vec<(NaiveDate, f64)>,
    lower: Option<Vec<f64>>,
    upper: Option<Vec<f64>>,
}

impl ForecastSeries {
    /// Index forecast values by consecutive calendar days following `anchor`.
    pub fn from_anchor(anchor: NaiveDate, values: Vec<f64>) -> Self {
        let points = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (anchor + Duration::days(i as i64 + 1), v))
            .collect();
        Self {
            anchor: Some(anchor),
            points,
            lower: None,
            upper: None,
        }
    }

    /// Attach prediction interval bounds, one pair per forecast step.
    pub fn with_intervals(mut self, lower: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        if lower.len() != self.points.len() || upper.len() != self.points.len() {
            return Err(StockcastError::DimensionMismatch {
                expected: self.points.len(),
                got: lower.len().min(upper.len()),
            });
        }
        self.lower = Some(lower);
        self.upper = Some(upper);
        Ok(self)
    }

    /// The last observed date the forecast extends from.
    pub fn anchor(&self) -> Option<NaiveDate> {
        self.anchor
    }

    /// Number of forecast steps.
    pub fn horizon(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[(NaiveDate, f64)] {
        &self.points
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, v)| *v).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|(d, _)| *d).collect()
    }

    pub fn lower(&self) -> Option<&[f64]> {
        self.lower.as_deref()
    }

    pub fn upper(&self) -> Option<&[f64]> {
        self.upper.as_deref()
    }

    /// Replace the forecast values in place, keeping the date index.
    ///
    /// Used to map a forecast from the standardized scale back to the price
    /// scale.
    pub fn map_values<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64,
    {
        for (_, v) in &mut self.points {
            *v = f(*v);
        }
        if let Some(lower) = &mut self.lower {
            for v in lower.iter_mut() {
                *v = f(*v);
            }
        }
        if let Some(upper) = &mut self.upper {
            for v in upper.iter_mut() {
                *v = f(*v);
            }
        }
    }

    /// Append the forecast to a history series, producing the combined
    /// series the chart layer plots. The history must end on or before the
    /// forecast anchor.
    pub fn append_to(&self, history: &DailySeries) -> Result<DailySeries> {
        if let (Some(last), Some(first)) = (history.last_date(), self.points.first()) {
            if first.0 <= last {
                return Err(StockcastError::DateOrder(format!(
                    "forecast starts {} but history ends {}",
                    first.0, last
                )));
            }
        }
        let mut points = history.points().to_vec();
        points.extend_from_slice(&self.points);
        DailySeries::new(points)
    }
}
