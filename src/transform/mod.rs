//! Series transforms: rolling-window smoothing and standardization.

mod scale;
mod window;

pub use scale::{standardize, ScaledSeries};
pub use window::{rolling_mean, rolling_mean_series};
