//! Descriptive history summaries for the dashboard header and charts.

use crate::core::DailySeries;
use crate::error::{Result, StockcastError};
use chrono::{Days, Months, NaiveDate};
use serde::Serialize;

/// Last close and its move against the prior close.
#[derive(Debug, Clone, Serialize)]
pub struct DailyChange {
    pub last_close: f64,
    pub change: f64,
    pub percent_change: f64,
}

/// Compute the latest daily move of a close series.
pub fn daily_change(series: &DailySeries) -> Result<DailyChange> {
    let points = series.points();
    if points.len() < 2 {
        return Err(StockcastError::InsufficientData {
            needed: 2,
            got: points.len(),
        });
    }

    let last = points[points.len() - 1].1;
    let prev = points[points.len() - 2].1;
    let change = last - prev;
    let percent_change = if prev != 0.0 {
        change / prev * 100.0
    } else {
        f64::NAN
    };

    Ok(DailyChange {
        last_close: last,
        change,
        percent_change,
    })
}

/// Chart range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    FiveDays,
    OneMonth,
    SixMonths,
    OneYear,
    FiveYears,
    Max,
}

impl Period {
    /// The exclusive cutoff date for a series ending at `last`; `None`
    /// keeps the whole series.
    fn cutoff(&self, last: NaiveDate) -> Option<NaiveDate> {
        match self {
            Period::FiveDays => last.checked_sub_days(Days::new(5)),
            Period::OneMonth => last.checked_sub_months(Months::new(1)),
            Period::SixMonths => last.checked_sub_months(Months::new(6)),
            Period::OneYear => last.checked_sub_months(Months::new(12)),
            Period::FiveYears => last.checked_sub_months(Months::new(60)),
            Period::Max => None,
        }
    }
}

/// Keep the points dated after the period cutoff, anchored at the last
/// point of the series.
pub fn clip_to_period(series: &DailySeries, period: Period) -> DailySeries {
    let cutoff = series.last_date().and_then(|last| period.cutoff(last));
    match cutoff {
        Some(cutoff) => {
            let points = series
                .points()
                .iter()
                .filter(|(date, _)| *date > cutoff)
                .copied()
                .collect();
            DailySeries::from_ordered(points)
        }
        None => series.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn daily(base: NaiveDate, values: &[f64]) -> DailySeries {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &v)| (base + Duration::days(i as i64), v))
            .collect();
        DailySeries::new(points).unwrap()
    }

    #[test]
    fn daily_change_arithmetic() {
        let series = daily(date(2024, 1, 1), &[100.0, 104.0, 102.0]);
        let change = daily_change(&series).unwrap();

        assert_relative_eq!(change.last_close, 102.0, epsilon = 1e-10);
        assert_relative_eq!(change.change, -2.0, epsilon = 1e-10);
        assert_relative_eq!(change.percent_change, -2.0 / 104.0 * 100.0, epsilon = 1e-10);
    }

    #[test]
    fn daily_change_needs_two_rows() {
        let series = daily(date(2024, 1, 1), &[100.0]);
        assert!(matches!(
            daily_change(&series),
            Err(StockcastError::InsufficientData { needed: 2, got: 1 })
        ));
    }

    #[test]
    fn clip_five_days_keeps_recent_tail() {
        let series = daily(date(2024, 3, 1), &[1.0; 20]);
        let clipped = clip_to_period(&series, Period::FiveDays);

        // Last date is 2024-03-20; cutoff 2024-03-15 exclusive.
        assert_eq!(clipped.len(), 5);
        assert_eq!(clipped.dates()[0], date(2024, 3, 16));
    }

    #[test]
    fn clip_one_month_uses_calendar_months() {
        let series = daily(date(2024, 1, 1), &[1.0; 60]);
        let clipped = clip_to_period(&series, Period::OneMonth);

        // Last date is 2024-02-29; cutoff 2024-01-29 exclusive.
        assert_eq!(clipped.dates()[0], date(2024, 1, 30));
    }

    #[test]
    fn clip_max_keeps_everything() {
        let series = daily(date(2024, 1, 1), &[1.0; 10]);
        assert_eq!(clip_to_period(&series, Period::Max).len(), 10);
    }

    #[test]
    fn clip_empty_series_is_empty() {
        let series = DailySeries::default();
        assert!(clip_to_period(&series, Period::OneYear).is_empty());
    }
}
