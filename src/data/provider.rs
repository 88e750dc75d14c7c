//! Market-data access: the collaborator trait and its HTTP implementation.

use crate::core::{PriceBar, PriceSeries};
use crate::data::profile::CompanyProfile;
use crate::error::{Result, StockcastError};
use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default anchor date history fetches start from.
pub const DEFAULT_START: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(date) => date,
    None => panic!("hard-coded start date is valid"),
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);
const USER_AGENT: &str = concat!("stockcast/", env!("CARGO_PKG_VERSION"));

/// Source of daily price history and fundamentals. The pipeline depends
/// only on this trait; tests drive it with in-memory implementations.
pub trait MarketData {
    /// Daily OHLCV bars for `ticker` from `start` to the most recent
    /// trading day.
    fn daily_history(&self, ticker: &str, start: NaiveDate) -> Result<PriceSeries>;

    /// Company fundamentals for `ticker`.
    fn company_profile(&self, ticker: &str) -> Result<CompanyProfile>;
}

#[derive(Debug, Deserialize)]
struct HistoryPayload {
    #[serde(default)]
    bars: Vec<BarPayload>,
}

/// One bar as the provider sends it. Numeric fields the provider omits
/// become `NAN` sentinels (zero for volume) rather than failing the fetch.
#[derive(Debug, Deserialize)]
struct BarPayload {
    date: NaiveDate,
    open: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
    close: Option<f64>,
    volume: Option<u64>,
}

impl BarPayload {
    fn into_bar(self) -> PriceBar {
        PriceBar::new(
            self.date,
            self.open.unwrap_or(f64::NAN),
            self.high.unwrap_or(f64::NAN),
            self.low.unwrap_or(f64::NAN),
            self.close.unwrap_or(f64::NAN),
            self.volume.unwrap_or(0),
        )
    }
}

/// Blocking HTTP market-data client with a request timeout and a bounded
/// linear-backoff retry policy.
#[derive(Debug, Clone)]
pub struct HttpMarketData {
    client: reqwest::blocking::Client,
    base_url: String,
    max_attempts: u32,
    retry_delay: Duration,
}

impl HttpMarketData {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_policy(
            base_url,
            DEFAULT_TIMEOUT,
            DEFAULT_MAX_ATTEMPTS,
            DEFAULT_RETRY_DELAY,
        )
    }

    pub fn with_policy(
        base_url: impl Into<String>,
        timeout: Duration,
        max_attempts: u32,
        retry_delay: Duration,
    ) -> Result<Self> {
        if max_attempts == 0 {
            return Err(StockcastError::InvalidParameter(
                "max_attempts must be positive".to_string(),
            ));
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| StockcastError::DataUnavailable(format!("http client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_attempts,
            retry_delay,
        })
    }

    /// GET with retries; transport errors and non-success statuses retry
    /// up to the attempt bound, then map to `DataUnavailable`.
    fn get_with_retry(&self, url: &str) -> Result<reqwest::blocking::Response> {
        let mut last_error = String::new();
        for attempt in 1..=self.max_attempts {
            match self.client.get(url).send() {
                Ok(response) if response.status().is_success() => return Ok(response),
                Ok(response) => {
                    last_error = format!("status {}", response.status());
                }
                Err(e) => {
                    last_error = e.to_string();
                }
            }
            if attempt < self.max_attempts {
                warn!(url, attempt, error = %last_error, "request failed, retrying");
                std::thread::sleep(self.retry_delay * attempt);
            }
        }
        Err(StockcastError::DataUnavailable(format!(
            "request failed after {} attempts: {last_error}",
            self.max_attempts
        )))
    }
}

impl MarketData for HttpMarketData {
    fn daily_history(&self, ticker: &str, start: NaiveDate) -> Result<PriceSeries> {
        let url = format!(
            "{}/v1/history/{}?start={}",
            self.base_url,
            ticker,
            start.format("%Y-%m-%d")
        );
        debug!(ticker, %start, "fetching daily history");

        let payload: HistoryPayload = self
            .get_with_retry(&url)?
            .json()
            .map_err(|e| StockcastError::DataUnavailable(format!("malformed history: {e}")))?;

        if payload.bars.is_empty() {
            return Err(StockcastError::DataUnavailable(format!(
                "no daily bars returned for {ticker}"
            )));
        }

        let mut bars: Vec<PriceBar> = payload.bars.into_iter().map(BarPayload::into_bar).collect();
        bars.sort_by_key(|b| b.date);
        let series = PriceSeries::new(bars).map_err(|e| {
            StockcastError::DataUnavailable(format!("inconsistent history for {ticker}: {e}"))
        })?;

        info!(ticker, bars = series.len(), "fetched daily history");
        Ok(series)
    }

    fn company_profile(&self, ticker: &str) -> Result<CompanyProfile> {
        let url = format!("{}/v1/profile/{}", self.base_url, ticker);
        debug!(ticker, "fetching company profile");

        self.get_with_retry(&url)?
            .json()
            .map_err(|e| StockcastError::DataUnavailable(format!("malformed profile: {e}")))
    }
}
