//! Property-based tests for the transforms and the forecaster.
//!
//! These verify invariants that should hold for all valid inputs, using
//! randomly generated series.

use chrono::NaiveDate;
use proptest::prelude::*;
use stockcast::core::ForecastSeries;
use stockcast::model::{Arima, Forecaster};
use stockcast::transform::{rolling_mean, standardize};
use stockcast::utils::metrics::rmse;

/// Series values away from extremes, with a little index-dependent
/// variation so no generated series is exactly constant.
fn valid_values(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    (min_len..max_len).prop_flat_map(|len| {
        prop::collection::vec(1.0..1000.0_f64, len).prop_map(|mut v| {
            for (i, val) in v.iter_mut().enumerate() {
                *val += (i as f64) * 0.001;
            }
            v
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn scale_inverse_round_trips(values in valid_values(1, 200)) {
        let scaled = standardize(&values).unwrap();
        let recovered = scaled.invert(scaled.values());

        for (orig, rec) in values.iter().zip(recovered.iter()) {
            prop_assert!((orig - rec).abs() <= orig.abs() * 1e-9);
        }
    }

    #[test]
    fn standardized_series_has_zero_mean(values in valid_values(2, 200)) {
        let scaled = standardize(&values).unwrap();
        let mean: f64 = scaled.values().iter().sum::<f64>() / scaled.len() as f64;
        prop_assert!(mean.abs() < 1e-8);
    }

    #[test]
    fn rolling_mean_shortens_by_window_minus_one(
        values in valid_values(10, 150),
        window in 1usize..10
    ) {
        let smoothed = rolling_mean(&values, window).unwrap();
        prop_assert_eq!(smoothed.len(), values.len() - window + 1);
    }

    #[test]
    fn rolling_mean_stays_within_input_range(values in valid_values(10, 150)) {
        let min = values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
        let max = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));

        for v in rolling_mean(&values, 7).unwrap() {
            prop_assert!(v >= min - 1e-9 && v <= max + 1e-9);
        }
    }

    #[test]
    fn arima_forecast_length_matches_horizon(
        values in valid_values(20, 100),
        horizon in 1usize..20
    ) {
        let mut model = Arima::new(1, 1, 1);
        model.fit(&values).unwrap();
        let forecast = model.predict(horizon).unwrap();
        prop_assert_eq!(forecast.len(), horizon);
    }

    #[test]
    fn rmse_is_non_negative(
        pair in (1usize..50).prop_flat_map(|len| (
            prop::collection::vec(-100.0..100.0_f64, len),
            prop::collection::vec(-100.0..100.0_f64, len),
        ))
    ) {
        let (actual, predicted) = pair;
        prop_assert!(rmse(&actual, &predicted).unwrap() >= 0.0);
    }

    #[test]
    fn rmse_zero_only_for_exact_match(values in valid_values(1, 50)) {
        prop_assert!(rmse(&values, &values).unwrap() == 0.0);

        let mut shifted = values.clone();
        shifted[0] += 1.0;
        prop_assert!(rmse(&values, &shifted).unwrap() > 0.0);
    }

    #[test]
    fn forecast_dates_are_consecutive(
        offset in 0i64..3000,
        values in valid_values(1, 40)
    ) {
        let anchor = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
            + chrono::Duration::days(offset);
        let forecast = ForecastSeries::from_anchor(anchor, values.clone());

        prop_assert_eq!(forecast.horizon(), values.len());
        let dates = forecast.dates();
        prop_assert_eq!(dates[0], anchor + chrono::Duration::days(1));
        for pair in dates.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], chrono::Duration::days(1));
        }
    }
}
