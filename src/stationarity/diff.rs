//! First-differencing and its inverse.

/// Apply `d` rounds of first-differencing. Each round shortens the series
/// by one; an exhausted series stops early rather than underflowing.
pub fn difference(series: &[f64], d: usize) -> Vec<f64> {
    let mut result = series.to_vec();
    for _ in 0..d {
        if result.len() <= 1 {
            break;
        }
        result = result.windows(2).map(|w| w[1] - w[0]).collect();
    }
    result
}

/// Reverse `d` rounds of differencing on a forecast continuation.
///
/// `original` is the undifferenced series the forecast extends; its tail
/// values at each differencing level seed the cumulative sums.
pub fn integrate(forecast_diff: &[f64], original: &[f64], d: usize) -> Vec<f64> {
    if d == 0 || forecast_diff.is_empty() {
        return forecast_diff.to_vec();
    }

    let mut result = forecast_diff.to_vec();
    for level in (0..d).rev() {
        let seed = if level == 0 {
            original.last().copied().unwrap_or(0.0)
        } else {
            difference(original, level).last().copied().unwrap_or(0.0)
        };

        let mut cumsum = seed;
        for value in &mut result {
            cumsum += *value;
            *value = cumsum;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn difference_orders() {
        let series = vec![1.0, 3.0, 6.0, 10.0, 15.0];
        assert_eq!(difference(&series, 0), series);
        assert_eq!(difference(&series, 1), vec![2.0, 3.0, 4.0, 5.0]);
        assert_eq!(difference(&series, 2), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn difference_exhausted_series_stops() {
        let series = vec![1.0, 2.0];
        assert_eq!(difference(&series, 5), vec![1.0]);
        assert!(difference(&[], 1).is_empty());
    }

    #[test]
    fn integrate_reverses_first_difference() {
        let original = vec![10.0, 12.0, 15.0, 19.0, 24.0];
        let forecast_diff = vec![6.0, 7.0];
        let integrated = integrate(&forecast_diff, &original, 1);

        // Continues from the last observation: 24 + 6, then + 7.
        assert_relative_eq!(integrated[0], 30.0, epsilon = 1e-10);
        assert_relative_eq!(integrated[1], 37.0, epsilon = 1e-10);
    }

    #[test]
    fn integrate_second_order_continues_pattern() {
        // Quadratic: second difference is constant 1.
        let original = vec![1.0, 3.0, 6.0, 10.0, 15.0];
        let integrated = integrate(&[1.0, 1.0], &original, 2);

        assert_relative_eq!(integrated[0], 21.0, epsilon = 1e-10);
        assert_relative_eq!(integrated[1], 28.0, epsilon = 1e-10);
    }

    #[test]
    fn integrate_order_zero_is_identity() {
        let diff = vec![1.0, 2.0];
        assert_eq!(integrate(&diff, &[5.0], 0), diff);
    }
}
