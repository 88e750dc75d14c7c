//! ARIMA (Autoregressive Integrated Moving Average) model.

use crate::error::{Result, StockcastError};
use crate::model::Forecaster;
use crate::stationarity::{difference, integrate};
use crate::utils::optimization::{simplex_minimize, SimplexConfig};
use statrs::distribution::{ContinuousCDF, Normal};

/// ARIMA order specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArimaSpec {
    /// Autoregressive order.
    pub p: usize,
    /// Differencing order.
    pub d: usize,
    /// Moving-average order.
    pub q: usize,
}

impl ArimaSpec {
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }

    /// AR and MA coefficients plus the intercept.
    pub fn num_params(&self) -> usize {
        self.p + self.q + 1
    }

    /// Fewest observations a fit can work with.
    pub fn min_observations(&self) -> usize {
        self.d + self.p.max(self.q) + 2
    }
}

/// ARIMA(p, d, q) fitted by conditional least squares.
///
/// The differenced series is modeled as an ARMA(p, q) process whose
/// conditional sum of squares is minimized with a bounded Nelder-Mead
/// search; forecasts are produced by iterated one-step prediction on the
/// differenced scale and integrated back.
#[derive(Debug, Clone)]
pub struct Arima {
    spec: ArimaSpec,
    ar: Vec<f64>,
    ma: Vec<f64>,
    intercept: f64,
    original: Option<Vec<f64>>,
    differenced: Option<Vec<f64>>,
    fitted: Option<Vec<f64>>,
    residuals: Option<Vec<f64>>,
    residual_variance: Option<f64>,
}

impl Arima {
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self::with_spec(ArimaSpec::new(p, d, q))
    }

    pub fn with_spec(spec: ArimaSpec) -> Self {
        Self {
            spec,
            ar: vec![],
            ma: vec![],
            intercept: 0.0,
            original: None,
            differenced: None,
            fitted: None,
            residuals: None,
            residual_variance: None,
        }
    }

    pub fn spec(&self) -> ArimaSpec {
        self.spec
    }

    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar
    }

    pub fn ma_coefficients(&self) -> &[f64] {
        &self.ma
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Conditional sum of squares of the ARMA recursion over the
    /// differenced series, with pre-sample residuals fixed at zero.
    fn conditional_ss(
        diff: &[f64],
        p: usize,
        q: usize,
        ar: &[f64],
        ma: &[f64],
        intercept: f64,
    ) -> f64 {
        let n = diff.len();
        let start = p.max(q);
        if n <= start {
            return f64::MAX;
        }

        let mut residuals = vec![0.0; n];
        let mut css = 0.0;
        for t in start..n {
            let mut pred = intercept;
            for i in 0..p {
                pred += ar[i] * (diff[t - 1 - i] - intercept);
            }
            for i in 0..q {
                pred += ma[i] * residuals[t - 1 - i];
            }
            let error = diff[t] - pred;
            residuals[t] = error;
            css += error * error;
        }
        css
    }

    fn estimate(&mut self, diff: &[f64]) -> Result<()> {
        let p = self.spec.p;
        let q = self.spec.q;
        let mean = diff.iter().sum::<f64>() / diff.len() as f64;

        if p == 0 && q == 0 {
            self.intercept = mean;
            self.ar = vec![];
            self.ma = vec![];
            return Ok(());
        }

        let mut initial = vec![0.0; self.spec.num_params()];
        initial[0] = mean;
        for i in 0..p {
            initial[1 + i] = 0.1 / (i + 1) as f64;
        }
        for i in 0..q {
            initial[1 + p + i] = 0.1 / (i + 1) as f64;
        }

        // Coefficients stay inside the unit interval for stationarity and
        // invertibility; the intercept is free.
        let mut bounds = vec![(f64::NEG_INFINITY, f64::INFINITY)];
        bounds.extend(std::iter::repeat((-0.99, 0.99)).take(p + q));

        let outcome = simplex_minimize(
            |params| {
                let intercept = params[0];
                let ar = &params[1..1 + p];
                let ma = &params[1 + p..];
                Self::conditional_ss(diff, p, q, ar, ma, intercept)
            },
            &initial,
            Some(&bounds),
            SimplexConfig::default(),
        );

        if !outcome.value.is_finite() || outcome.point.iter().any(|v| !v.is_finite()) {
            return Err(StockcastError::ModelFit(format!(
                "conditional sum of squares did not stay finite after {} iterations",
                outcome.iterations
            )));
        }

        self.intercept = outcome.point[0];
        self.ar = outcome.point[1..1 + p].to_vec();
        self.ma = outcome.point[1 + p..].to_vec();
        Ok(())
    }

    fn compute_fitted(&mut self, diff: &[f64]) -> Result<()> {
        let n = diff.len();
        let p = self.spec.p;
        let q = self.spec.q;
        let start = p.max(q);

        let mut fitted = vec![f64::NAN; n];
        let mut residuals = vec![0.0; n];
        for t in start..n {
            let mut pred = self.intercept;
            for i in 0..p {
                pred += self.ar[i] * (diff[t - 1 - i] - self.intercept);
            }
            for i in 0..q {
                pred += self.ma[i] * residuals[t - 1 - i];
            }
            fitted[t] = pred;
            residuals[t] = diff[t] - pred;
        }

        let tail = &residuals[start..];
        if !tail.is_empty() {
            let variance = tail.iter().map(|r| r * r).sum::<f64>() / tail.len() as f64;
            if !variance.is_finite() {
                return Err(StockcastError::ModelFit(
                    "residual variance is not finite".to_string(),
                ));
            }
            self.residual_variance = Some(variance);
        }

        self.fitted = Some(fitted);
        self.residuals = Some(residuals);
        Ok(())
    }
}

impl Forecaster for Arima {
    fn fit(&mut self, series: &[f64]) -> Result<()> {
        let min_len = self.spec.min_observations();
        if series.len() < min_len {
            return Err(StockcastError::InsufficientData {
                needed: min_len,
                got: series.len(),
            });
        }

        self.original = Some(series.to_vec());
        let diff = difference(series, self.spec.d);
        self.estimate(&diff)?;
        self.compute_fitted(&diff)?;
        self.differenced = Some(diff);
        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Vec<f64>> {
        let original = self.original.as_ref().ok_or(StockcastError::FitRequired)?;
        let diff = self.differenced.as_ref().ok_or(StockcastError::FitRequired)?;
        let residuals = self.residuals.as_ref().ok_or(StockcastError::FitRequired)?;

        if horizon == 0 {
            return Ok(vec![]);
        }

        let p = self.spec.p;
        let q = self.spec.q;

        // Iterated one-step prediction; future shocks are zero.
        let mut extended = diff.clone();
        let mut shocks = residuals.clone();
        for _ in 0..horizon {
            let t = extended.len();
            let mut pred = self.intercept;
            for i in 0..p {
                if t > i {
                    pred += self.ar[i] * (extended[t - 1 - i] - self.intercept);
                }
            }
            for i in 0..q {
                if t > i {
                    pred += self.ma[i] * shocks[t - 1 - i];
                }
            }
            extended.push(pred);
            shocks.push(0.0);
        }

        let forecast_diff = extended[diff.len()..].to_vec();
        if self.spec.d > 0 {
            Ok(integrate(&forecast_diff, original, self.spec.d))
        } else {
            Ok(forecast_diff)
        }
    }

    fn predict_with_intervals(
        &self,
        horizon: usize,
        level: f64,
    ) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)> {
        let point = self.predict(horizon)?;
        let variance = self.residual_variance.unwrap_or(0.0);

        let normal = Normal::new(0.0, 1.0)
            .map_err(|e| StockcastError::InvalidParameter(e.to_string()))?;
        let z = normal.inverse_cdf((1.0 + level) / 2.0);

        let mut lower = Vec::with_capacity(horizon);
        let mut upper = Vec::with_capacity(horizon);
        for (h, value) in point.iter().enumerate() {
            // Forecast variance grows with horizon.
            let se = (variance * (h + 1) as f64).sqrt();
            lower.push(value - z * se);
            upper.push(value + z * se);
        }
        Ok((point, lower, upper))
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted.as_deref()
    }

    fn residuals(&self) -> Option<&[f64]> {
        self.residuals.as_deref()
    }

    fn name(&self) -> &str {
        "ARIMA"
    }
}
