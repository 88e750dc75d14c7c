//! End-to-end pipeline tests against an in-memory market-data provider.

use chrono::{Duration, NaiveDate};
use stockcast::analysis::{daily_change, sma};
use stockcast::core::{PriceBar, PriceSeries};
use stockcast::data::{CompanyProfile, MarketData};
use stockcast::error::StockcastError;
use stockcast::pipeline::{ForecastPipeline, PipelineConfig};
use stockcast::Result;

/// Deterministic in-memory provider serving a pre-built history.
struct SyntheticMarket {
    history: PriceSeries,
}

impl MarketData for SyntheticMarket {
    fn daily_history(&self, _ticker: &str, _start: NaiveDate) -> Result<PriceSeries> {
        Ok(self.history.clone())
    }

    fn company_profile(&self, ticker: &str) -> Result<CompanyProfile> {
        Ok(CompanyProfile {
            symbol: ticker.to_string(),
            sector: Some("Synthetic".to_string()),
            ..Default::default()
        })
    }
}

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn pseudo_noise(i: usize) -> f64 {
    ((i * 37 + 11) % 89) as f64 / 22.0 - 2.0
}

/// Linearly trending close series with deterministic noise.
fn trending_history(len: usize) -> PriceSeries {
    let bars = (0..len)
        .map(|i| {
            let close = 100.0 + 0.5 * i as f64 + pseudo_noise(i);
            PriceBar::new(
                start_date() + Duration::days(i as i64),
                close - 0.5,
                close + 1.0,
                close - 1.0,
                close,
                1_000_000,
            )
        })
        .collect();
    PriceSeries::new(bars).unwrap()
}

#[test]
fn full_pipeline_on_trending_series() {
    let history = trending_history(400);
    let last_input_date = history.last_date().unwrap();
    let provider = SyntheticMarket { history };
    let pipeline = ForecastPipeline::new(provider);

    let report = pipeline.run("SYN").unwrap();

    // Exactly 30 forecast rows with contiguous dates starting the day
    // after the last observed bar.
    assert_eq!(report.forecast.horizon(), 30);
    let dates = report.forecast.dates();
    assert_eq!(dates[0], last_input_date + Duration::days(1));
    for pair in dates.windows(2) {
        assert_eq!(pair[1] - pair[0], Duration::days(1));
    }

    // A trending series needs at least one difference.
    assert!(report.differencing_order >= 1);
    assert!(report.rmse >= 0.0);

    // The first forecast step stays near the last smoothed observation.
    let smoothed_values: Vec<f64> = report.combined.values()[..report.combined.len() - 30].to_vec();
    let last_smoothed = *smoothed_values.last().unwrap();
    let span = smoothed_values
        .iter()
        .fold(f64::NEG_INFINITY, |a, &b| a.max(b))
        - smoothed_values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let first_forecast = report.forecast.values()[0];
    assert!(
        (first_forecast - last_smoothed).abs() < 0.05 * span,
        "first forecast {first_forecast} too far from last smoothed {last_smoothed}"
    );
}

#[test]
fn combined_series_is_history_plus_forecast() {
    let pipeline = ForecastPipeline::new(SyntheticMarket {
        history: trending_history(400),
    });
    let report = pipeline.run("SYN").unwrap();

    // Smoothing drops window-1 bars; the forecast adds horizon rows.
    assert_eq!(report.combined.len(), 400 - 6 + 30);

    let tail = report.combined.tail(30);
    assert_eq!(tail.values(), report.forecast.values());
    assert_eq!(tail.dates(), report.forecast.dates());
}

#[test]
fn empty_history_is_insufficient() {
    let pipeline = ForecastPipeline::new(SyntheticMarket {
        history: PriceSeries::default(),
    });
    assert!(matches!(
        pipeline.run("SYN"),
        Err(StockcastError::InsufficientData { .. })
    ));
}

#[test]
fn single_row_history_is_insufficient() {
    let history = PriceSeries::new(vec![PriceBar::new(
        start_date(),
        100.0,
        101.0,
        99.0,
        100.5,
        1_000,
    )])
    .unwrap();
    let pipeline = ForecastPipeline::new(SyntheticMarket { history });

    assert!(matches!(
        pipeline.run("SYN"),
        Err(StockcastError::InsufficientData { .. })
    ));
}

#[test]
fn history_shorter_than_split_is_insufficient() {
    // Survives smoothing but cannot carve out a 30-point held-out tail.
    let pipeline = ForecastPipeline::new(SyntheticMarket {
        history: trending_history(30),
    });
    assert!(matches!(
        pipeline.run("SYN"),
        Err(StockcastError::InsufficientData { .. })
    ));
}

#[test]
fn invalid_config_is_rejected() {
    let provider = SyntheticMarket {
        history: trending_history(100),
    };
    let config = PipelineConfig {
        horizon: 0,
        ..Default::default()
    };
    assert!(matches!(
        ForecastPipeline::with_config(provider, config),
        Err(StockcastError::InvalidParameter(_))
    ));
}

#[test]
fn custom_orders_flow_through() {
    // Small AR/MA orders still produce a full-length forecast.
    let provider = SyntheticMarket {
        history: trending_history(200),
    };
    let config = PipelineConfig {
        ar_order: 2,
        ma_order: 2,
        ..Default::default()
    };
    let pipeline = ForecastPipeline::with_config(provider, config).unwrap();

    let report = pipeline.run("SYN").unwrap();
    assert_eq!(report.forecast.horizon(), 30);
    assert!(report.forecast.values().iter().all(|v| v.is_finite()));
}

#[test]
fn analytics_over_provider_history() {
    let provider = SyntheticMarket {
        history: trending_history(100),
    };
    let history = provider.daily_history("SYN", start_date()).unwrap();
    assert_eq!(history.first_date(), Some(start_date()));
    assert_eq!(history.last().unwrap().volume, 1_000_000);

    let closes = history.close_series();

    let change = daily_change(&closes).unwrap();
    assert_eq!(change.last_close, closes.last_value().unwrap());

    let overlay = sma(&history.closes(), 50);
    assert_eq!(overlay.len(), 100);
    assert!(overlay[48].is_nan());
    assert!(overlay[99].is_finite());

    let profile = provider.company_profile("SYN").unwrap();
    assert_eq!(profile.sector(), "Synthetic");
    assert_eq!(profile.website(), "N/A");
}
