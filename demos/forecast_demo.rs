//! Run the forecasting pipeline over a synthetic ticker and print the
//! 30-day forecast table.
//!
//! ```sh
//! cargo run --example forecast_demo
//! ```

use chrono::{Duration, NaiveDate};
use stockcast::core::{PriceBar, PriceSeries};
use stockcast::data::{CompanyProfile, MarketData};
use stockcast::pipeline::ForecastPipeline;
use stockcast::Result;

/// In-memory provider serving a trending synthetic history, so the demo
/// runs without a market-data endpoint.
struct DemoMarket;

impl MarketData for DemoMarket {
    fn daily_history(&self, _ticker: &str, start: NaiveDate) -> Result<PriceSeries> {
        let bars = (0..400)
            .map(|i| {
                let noise = ((i * 37 + 11) % 89) as f64 / 22.0 - 2.0;
                let close = 100.0 + 0.5 * i as f64 + noise;
                PriceBar::new(
                    start + Duration::days(i as i64),
                    close - 0.5,
                    close + 1.0,
                    close - 1.0,
                    close,
                    1_000_000,
                )
            })
            .collect();
        PriceSeries::new(bars)
    }

    fn company_profile(&self, ticker: &str) -> Result<CompanyProfile> {
        Ok(CompanyProfile {
            symbol: ticker.to_string(),
            name: Some("Demo Corp.".to_string()),
            sector: Some("Synthetic".to_string()),
            ..Default::default()
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let pipeline = ForecastPipeline::new(DemoMarket);
    let report = pipeline.run("DEMO")?;

    let profile = pipeline.provider().company_profile("DEMO")?;
    println!("{} ({})", profile.name(), profile.sector());
    println!("model RMSE (standardized): {:.4}", report.rmse);
    println!("differencing order: {}", report.differencing_order);
    println!();
    println!("{:<12} {:>10}", "date", "close");
    for (date, value) in report.forecast.points() {
        println!("{:<12} {:>10.3}", date.to_string(), value);
    }
    Ok(())
}
