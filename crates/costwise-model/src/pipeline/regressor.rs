use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

const DEFAULT_ETA0: f64 = 0.01;
const DEFAULT_POWER_T: f64 = 0.25;
const DEFAULT_ALPHA: f64 = 1e-4;

/// Linear regressor trained by stochastic gradient descent.
///
/// One observation, one gradient step; there is no batching and no epoch
/// concept. Squared-error loss with L2 penalty `alpha`, and an
/// inverse-scaling learning rate `eta0 / t^power_t` where `t` counts
/// gradient steps starting from 1. All of `weights`, `intercept` and the
/// step counter are part of the persisted state, so a reloaded model
/// resumes its schedule where it left off.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SgdRegressor {
    weights: Array1<f64>,
    intercept: f64,
    eta0: f64,
    power_t: f64,
    alpha: f64,
    t: u64,
}

impl SgdRegressor {
    /// Zero-initialized regressor for `width` feature columns.
    pub fn new(width: usize) -> Self {
        Self {
            weights: Array1::zeros(width),
            intercept: 0.0,
            eta0: DEFAULT_ETA0,
            power_t: DEFAULT_POWER_T,
            alpha: DEFAULT_ALPHA,
            t: 1,
        }
    }

    /// Number of feature columns this regressor expects.
    pub fn width(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.weights.view()
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Gradient steps taken so far plus one (the schedule position).
    pub fn steps(&self) -> u64 {
        self.t
    }

    /// Raw regression output `w·x + b`. No mutation.
    pub fn decision(&self, row: ArrayView1<'_, f64>) -> ModelResult<f64> {
        self.check_width(row)?;
        Ok(self.weights.dot(&row) + self.intercept)
    }

    /// Take one gradient step toward the observed label.
    ///
    /// Squared-error gradient `(p - y)` with the L2 term applied to the
    /// weights only; the intercept is unregularized.
    pub fn partial_fit(&mut self, row: ArrayView1<'_, f64>, y: f64) -> ModelResult<()> {
        let residual = self.decision(row)? - y;
        let eta = self.eta0 / (self.t as f64).powf(self.power_t);

        for (w, &x) in self.weights.iter_mut().zip(row.iter()) {
            *w -= eta * (residual * x + self.alpha * *w);
        }
        self.intercept -= eta * residual;
        self.t += 1;
        Ok(())
    }

    fn check_width(&self, row: ArrayView1<'_, f64>) -> ModelResult<()> {
        if row.len() != self.width() {
            return Err(ModelError::DimensionMismatch {
                expected: self.width(),
                actual: row.len(),
            });
        }
        Ok(())
    }
}
