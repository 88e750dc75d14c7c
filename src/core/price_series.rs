//! Price history types: OHLCV bars and derived daily value series.

use crate::error::{Result, StockcastError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of OHLCV data.
///
/// Fields the provider could not supply are carried as `f64::NAN` sentinels
/// rather than dropping the whole bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl PriceBar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Immutable daily price history, strictly increasing by date, one bar per
/// trading day.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series from bars, validating the date order.
    pub fn new(bars: Vec<PriceBar>) -> Result<Self> {
        for window in bars.windows(2) {
            if window[1].date <= window[0].date {
                return Err(StockcastError::DateOrder(format!(
                    "bar dates must be strictly increasing: {} followed by {}",
                    window[0].date, window[1].date
                )));
            }
        }
        Ok(Self { bars })
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.bars.first().map(|b| b.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.bars.last().map(|b| b.date)
    }

    /// Closing prices in date order, including any `NAN` sentinels.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Closing prices as a dated series, skipping bars whose close is a
    /// missing-value sentinel.
    pub fn close_series(&self) -> DailySeries {
        let points = self
            .bars
            .iter()
            .filter(|b| !b.close.is_nan())
            .map(|b| (b.date, b.close))
            .collect();
        DailySeries::from_ordered(points)
    }
}

/// An ordered sequence of `(date, value)` pairs with strictly increasing
/// dates: the shape of the smoothed close series and of the combined
/// history-plus-forecast chart series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailySeries {
    points: Vec<(NaiveDate, f64)>,
}

impl DailySeries {
    /// Build a series from points, validating the date order.
    pub fn new(points: Vec<(NaiveDate, f64)>) -> Result<Self> {
        for window in points.windows(2) {
            if window[1].0 <= window[0].0 {
                return Err(StockcastError::DateOrder(format!(
                    "dates must be strictly increasing: {} followed by {}",
                    window[0].0, window[1].0
                )));
            }
        }
        Ok(Self { points })
    }

    /// Build from points already known to be in strictly increasing date
    /// order (derived from an already-validated series).
    pub(crate) fn from_ordered(points: Vec<(NaiveDate, f64)>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].0 < w[1].0));
        Self { points }
    }

    pub fn len(&self) -> usize {
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

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|(d, _)| *d)
    }

    pub fn last_value(&self) -> Option<f64> {
        self.points.last().map(|(_, v)| *v)
    }

    /// The final `n` points (the whole series if shorter).
    pub fn tail(&self, n: usize) -> DailySeries {
        let skip = self.points.len().saturating_sub(n);
        Self::from_ordered(self.points[skip..].to_vec())
    }
}
