//! Stationarity analysis: unit-root testing, differencing, and the
//! differencing-order loop that feeds the ARIMA `d` parameter.

mod adf;
mod diff;
mod order;

pub use adf::{adf_test, AdfResult, MIN_OBSERVATIONS};
pub use diff::{difference, integrate};
pub use order::{differencing_order, DEFAULT_MAX_DIFFERENCING};
