//! Technical indicators for chart overlays.
//!
//! Warm-up slots (before an indicator has a full window) hold `NAN`,
//! matching the missing-value convention of the rest of the crate.

/// Simple moving average over `period` closes.
pub fn sma(closes: &[f64], period: usize) -> Vec<f64> {
    let mut values = vec![f64::NAN; closes.len()];
    if period == 0 || closes.len() < period {
        return values;
    }

    let mut sum: f64 = closes[..period].iter().sum();
    values[period - 1] = sum / period as f64;
    for i in period..closes.len() {
        sum += closes[i] - closes[i - period];
        values[i] = sum / period as f64;
    }
    values
}

/// Exponential moving average with `alpha = 2 / (period + 1)`, seeded with
/// the first close.
pub fn ema(closes: &[f64], period: usize) -> Vec<f64> {
    if closes.is_empty() || period == 0 {
        return vec![f64::NAN; closes.len()];
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let mut values = Vec::with_capacity(closes.len());
    let mut current = closes[0];
    values.push(current);
    for &close in &closes[1..] {
        current = alpha * close + (1.0 - alpha) * current;
        values.push(current);
    }
    values
}

/// Relative strength index with Wilder smoothing.
pub fn rsi(closes: &[f64], period: usize) -> Vec<f64> {
    let mut values = vec![f64::NAN; closes.len()];
    if period == 0 || closes.len() <= period {
        return values;
    }

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for i in 1..=period {
        let delta = closes[i] - closes[i - 1];
        avg_gain += delta.max(0.0);
        avg_loss += (-delta).max(0.0);
    }
    avg_gain /= period as f64;
    avg_loss /= period as f64;
    values[period] = rsi_value(avg_gain, avg_loss);

    for i in period + 1..closes.len() {
        let delta = closes[i] - closes[i - 1];
        let gain = delta.max(0.0);
        let loss = (-delta).max(0.0);
        avg_gain = (avg_gain * (period as f64 - 1.0) + gain) / period as f64;
        avg_loss = (avg_loss * (period as f64 - 1.0) + loss) / period as f64;
        values[i] = rsi_value(avg_gain, avg_loss);
    }
    values
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}

/// MACD line (12/26 EMA difference), 9-period signal line, and histogram.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

pub fn macd(closes: &[f64]) -> MacdSeries {
    const FAST: usize = 12;
    const SLOW: usize = 26;
    const SIGNAL: usize = 9;

    let fast = ema(closes, FAST);
    let slow = ema(closes, SLOW);
    let macd: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal = ema(&macd, SIGNAL);
    let histogram = macd.iter().zip(&signal).map(|(m, s)| m - s).collect();

    MacdSeries {
        macd,
        signal,
        histogram,
    }
}
