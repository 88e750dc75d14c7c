//! Differencing-order detection via repeated unit-root testing.

use crate::error::{Result, StockcastError};
use crate::stationarity::adf::adf_test;
use crate::stationarity::diff::difference;
use tracing::debug;

/// Default cap on the differencing loop. The test data for equity closes
/// settles at d = 1 or 2; anything past this indicates a pathological
/// series, not a higher integration order.
pub const DEFAULT_MAX_DIFFERENCING: usize = 5;

/// Count how many first-differences the series needs before the ADF test
/// rejects a unit root at `significance`.
///
/// The loop is bounded: once `max_differencing` rounds are spent without
/// reaching stationarity, or the shrinking series drops below the test
/// minimum, the error is `InsufficientData` rather than an endless loop.
pub fn differencing_order(
    series: &[f64],
    significance: f64,
    max_differencing: usize,
) -> Result<usize> {
    if !(0.0..1.0).contains(&significance) || significance == 0.0 {
        return Err(StockcastError::InvalidParameter(format!(
            "significance must be in (0, 1), got {significance}"
        )));
    }

    let mut current = series.to_vec();
    let mut d = 0;
    loop {
        let result = adf_test(&current, None)?;
        debug!(d, p_value = result.p_value, "unit-root test");
        if result.is_stationary(significance) {
            return Ok(d);
        }
        if d == max_differencing {
            // Differencing budget spent without reaching stationarity; the
            // sample cannot support a stationary representation.
            return Err(StockcastError::InsufficientData {
                needed: series.len() + 1,
                got: series.len(),
            });
        }
        d += 1;
        current = difference(&current, 1);
    }
}
