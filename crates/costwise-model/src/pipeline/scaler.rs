use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Standardizing scaler fitted from running statistics.
///
/// Keeps a per-column running mean and population variance plus the total
/// sample count, so it can absorb one observation at a time without a
/// full-dataset refit. Online single-sample updates drift the statistics
/// away from the true global ones; that approximation is accepted by the
/// update protocol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningScaler {
    mean: Array1<f64>,
    variance: Array1<f64>,
    samples_seen: u64,
}

impl RunningScaler {
    /// Unfitted scaler for `width` feature columns.
    pub fn new(width: usize) -> Self {
        Self {
            mean: Array1::zeros(width),
            variance: Array1::zeros(width),
            samples_seen: 0,
        }
    }

    /// Number of feature columns this scaler was fitted for.
    pub fn width(&self) -> usize {
        self.mean.len()
    }

    /// Total observations absorbed so far.
    pub fn samples_seen(&self) -> u64 {
        self.samples_seen
    }

    pub fn mean(&self) -> ArrayView1<'_, f64> {
        self.mean.view()
    }

    pub fn variance(&self) -> ArrayView1<'_, f64> {
        self.variance.view()
    }

    /// Absorb a single observation into the running statistics.
    ///
    /// Welford update, normalized by the sample count (population
    /// variance). The first observation sets the mean outright and leaves
    /// the variance at zero.
    pub fn partial_fit(&mut self, row: ArrayView1<'_, f64>) -> ModelResult<()> {
        self.check_width(row)?;

        let n_new = self.samples_seen + 1;
        for (col, &x) in row.iter().enumerate() {
            let delta = x - self.mean[col];
            self.mean[col] += delta / n_new as f64;
            let delta2 = x - self.mean[col];
            self.variance[col] =
                (self.variance[col] * self.samples_seen as f64 + delta * delta2) / n_new as f64;
        }
        self.samples_seen = n_new;
        Ok(())
    }

    /// Standardize one row: `(x - mean) / scale`.
    ///
    /// Columns with zero variance (constant so far, or scaler unfitted)
    /// are passed through with a scale of 1.0 instead of dividing by zero.
    pub fn transform(&self, row: ArrayView1<'_, f64>) -> ModelResult<Array1<f64>> {
        self.check_width(row)?;

        let mut out = Array1::zeros(row.len());
        for (col, &x) in row.iter().enumerate() {
            let std = self.variance[col].sqrt();
            let scale = if std == 0.0 { 1.0 } else { std };
            out[col] = (x - self.mean[col]) / scale;
        }
        Ok(out)
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

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::RunningScaler;
    use crate::error::ModelError;

    #[test]
    fn first_sample_sets_mean_with_zero_variance() {
        let mut scaler = RunningScaler::new(2);
        scaler.partial_fit(array![3.0, -1.0].view()).unwrap();

        assert_eq!(scaler.samples_seen(), 1);
        assert_eq!(scaler.mean()[0], 3.0);
        assert_eq!(scaler.mean()[1], -1.0);
        assert_eq!(scaler.variance()[0], 0.0);
    }

    #[test]
    fn running_stats_match_population_moments() {
        let mut scaler = RunningScaler::new(1);
        for x in [2.0, 4.0, 6.0, 8.0] {
            scaler.partial_fit(array![x].view()).unwrap();
        }

        // mean 5, population variance 5
        assert!((scaler.mean()[0] - 5.0).abs() < 1e-12);
        assert!((scaler.variance()[0] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn transform_standardizes_fitted_columns() {
        let mut scaler = RunningScaler::new(1);
        for x in [2.0, 4.0, 6.0, 8.0] {
            scaler.partial_fit(array![x].view()).unwrap();
        }

        let z = scaler.transform(array![5.0].view()).unwrap();
        assert!(z[0].abs() < 1e-12);

        let z = scaler.transform(array![5.0 + 5.0_f64.sqrt()].view()).unwrap();
        assert!((z[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_variance_columns_pass_through_unscaled() {
        let mut scaler = RunningScaler::new(1);
        scaler.partial_fit(array![7.0].view()).unwrap();
        scaler.partial_fit(array![7.0].view()).unwrap();

        let z = scaler.transform(array![9.0].view()).unwrap();
        assert_eq!(z[0], 2.0);
    }

    #[test]
    fn unfitted_transform_is_identity() {
        let scaler = RunningScaler::new(2);
        let z = scaler.transform(array![1.5, -2.5].view()).unwrap();
        assert_eq!(z, array![1.5, -2.5]);
    }

    #[test]
    fn wrong_width_is_rejected() {
        let mut scaler = RunningScaler::new(3);
        let err = scaler.partial_fit(array![1.0].view()).unwrap_err();
        assert!(matches!(
            err,
            ModelError::DimensionMismatch {
                expected: 3,
                actual: 1
            }
        ));
    }
}
