//! Error types for the stockcast library.

use thiserror::Error;

/// Result type alias for stockcast operations.
pub type Result<T> = std::result::Result<T, StockcastError>;

/// Errors that can occur while loading market data or running the
/// forecasting pipeline.
///
/// All variants propagate to the orchestration boundary un-recovered; the
/// presentation layer decides whether to retry or surface them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StockcastError {
    /// Market-data fetch returned empty or malformed data, or the transport
    /// failed after the bounded retries.
    #[error("market data unavailable: {0}")]
    DataUnavailable(String),

    /// Series too short for the requested operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// The model optimizer failed to converge or met a singular system.
    #[error("model fit failed: {0}")]
    ModelFit(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Length mismatch between paired series.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Dates are not strictly increasing.
    #[error("date order error: {0}")]
    DateOrder(String),

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,
}
