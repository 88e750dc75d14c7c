//! Augmented Dickey-Fuller unit-root test.

use crate::error::{Result, StockcastError};

/// Minimum observations the test regression needs.
pub const MIN_OBSERVATIONS: usize = 5;

/// Outcome of a unit-root test.
#[derive(Debug, Clone)]
pub struct AdfResult {
    /// The t-statistic of the level coefficient.
    pub statistic: f64,
    /// Approximate p-value (MacKinnon table lookup).
    pub p_value: f64,
    /// Lag order selected by AIC.
    pub lags: usize,
}

impl AdfResult {
    /// Whether the null of a unit root is rejected at `significance`.
    pub fn is_stationary(&self, significance: f64) -> bool {
        self.p_value <= significance
    }
}

/// OLS of the first difference on the lagged level,
/// `Δy_t = α + β·y_{t-1} + ε_t`, over observations from `lag` on.
struct LevelRegression {
    beta: f64,
    se: f64,
    rss: f64,
    n_eff: usize,
}

fn level_regression(diff: &[f64], level: &[f64], lag: usize) -> Option<LevelRegression> {
    let n = diff.len();
    if n <= lag + 2 || level.len() < n {
        return None;
    }
    let n_eff = n - lag;

    let y_mean = diff[lag..].iter().sum::<f64>() / n_eff as f64;
    let x_mean = level[lag..n].iter().sum::<f64>() / n_eff as f64;

    let mut xx = 0.0;
    let mut xy = 0.0;
    let mut yy = 0.0;
    for i in lag..n {
        let x = level[i] - x_mean;
        let y = diff[i] - y_mean;
        xx += x * x;
        xy += x * y;
        yy += y * y;
    }

    if xx <= 0.0 {
        return None;
    }

    let beta = xy / xx;
    let rss = (yy - beta * xy).max(0.0);
    let sigma_sq = rss / (n_eff.saturating_sub(2)).max(1) as f64;
    let se = (sigma_sq / xx).sqrt();

    Some(LevelRegression {
        beta,
        se,
        rss,
        n_eff,
    })
}

/// AIC of the level regression at a given lag order.
fn regression_aic(diff: &[f64], level: &[f64], lag: usize) -> f64 {
    match level_regression(diff, level, lag) {
        Some(reg) if reg.rss > 0.0 => {
            let k = (lag + 2) as f64;
            reg.n_eff as f64 * (reg.rss / reg.n_eff as f64).ln() + 2.0 * k
        }
        _ => f64::INFINITY,
    }
}

/// Run the Augmented Dickey-Fuller test against the null hypothesis that
/// the series has a unit root (is non-stationary).
///
/// The lag order is chosen by AIC up to `max_lags` (default `(n-1)^(1/3)`).
/// Rejection (small p-value) implies stationarity.
pub fn adf_test(series: &[f64], max_lags: Option<usize>) -> Result<AdfResult> {
    let n = series.len();
    if n < MIN_OBSERVATIONS {
        return Err(StockcastError::InsufficientData {
            needed: MIN_OBSERVATIONS,
            got: n,
        });
    }

    let max_lags = max_lags
        .unwrap_or_else(|| ((n - 1) as f64).powf(1.0 / 3.0).floor() as usize)
        .min(n / 2 - 1)
        .max(1);

    let diff: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();
    let level = &series[..n - 1];

    let best_lag = (1..=max_lags)
        .map(|lag| (lag, regression_aic(&diff, level, lag)))
        .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(lag, _)| lag)
        .unwrap_or(1);

    let reg = level_regression(&diff, level, best_lag).ok_or_else(|| {
        StockcastError::ModelFit("singular regression in unit-root test".to_string())
    })?;

    if reg.se == 0.0 || !reg.se.is_finite() {
        return Err(StockcastError::ModelFit(
            "zero-variance regressor in unit-root test".to_string(),
        ));
    }

    let statistic = reg.beta / reg.se;
    Ok(AdfResult {
        statistic,
        p_value: approximate_p_value(statistic),
        lags: best_lag,
    })
}

/// MacKinnon-style p-value approximation for the constant-only ADF
/// regression: step thresholds below zero, smooth tail above.
fn approximate_p_value(t_stat: f64) -> f64 {
    const TABLE: &[(f64, f64)] = &[
        (-4.0, 0.001),
        (-3.43, 0.01),
        (-2.86, 0.05),
        (-2.57, 0.10),
        (-1.94, 0.20),
        (-1.62, 0.30),
        (-1.28, 0.40),
        (-0.84, 0.50),
        (0.0, 0.70),
    ];

    if t_stat.is_nan() {
        return f64::NAN;
    }
    for &(threshold, p) in TABLE {
        if t_stat < threshold {
            return p;
        }
    }
    0.90 + 0.05 * (1.0 - (-t_stat).exp())
}
