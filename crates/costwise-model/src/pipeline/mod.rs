//! Two-stage regression pipeline: standardize, then regress.
mod scaler;
pub use scaler::RunningScaler;

mod regressor;
pub use regressor::SgdRegressor;

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::{
    error::{ModelError, ModelResult},
    schema::FeatureSchema,
};

/// The persisted cost model: feature schema plus the two fitted stages.
///
/// Stage order is fixed and meaningful. Prediction applies scale → regress
/// and never mutates; learning mutates both stages in place, one
/// observation at a time. The schema is embedded in the artifact so a
/// width mismatch between the stages and the extraction vocabulary is
/// caught at load time instead of surfacing later as a dimension error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostModel {
    schema: FeatureSchema,
    scaler: RunningScaler,
    regressor: SgdRegressor,
}

impl CostModel {
    /// Fresh, unfitted model for the given schema.
    pub fn new(schema: FeatureSchema) -> Self {
        let width = schema.width();
        Self {
            schema,
            scaler: RunningScaler::new(width),
            regressor: SgdRegressor::new(width),
        }
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn scaler(&self) -> &RunningScaler {
        &self.scaler
    }

    pub fn regressor(&self) -> &SgdRegressor {
        &self.regressor
    }

    /// Cross-check stage widths against the embedded schema.
    ///
    /// Run after deserialization; a hand-edited or stale artifact fails
    /// here rather than on the first request.
    pub fn validate(&self) -> ModelResult<()> {
        let want = self.schema.width();
        if self.scaler.width() != want {
            return Err(ModelError::SchemaMismatch(format!(
                "scaler is fitted for {} columns, schema declares {}",
                self.scaler.width(),
                want
            )));
        }
        if self.regressor.width() != want {
            return Err(ModelError::SchemaMismatch(format!(
                "regressor is fitted for {} columns, schema declares {}",
                self.regressor.width(),
                want
            )));
        }
        Ok(())
    }

    /// Raw cost prediction for one feature row: scale, then regress.
    pub fn predict(&self, row: ArrayView1<'_, f64>) -> ModelResult<f64> {
        let scaled = self.scaler.transform(row)?;
        self.regressor.decision(scaled.view())
    }

    /// One online learning step against an observed true cost.
    ///
    /// In order: the scaler absorbs the raw row, the row is transformed
    /// through the just-updated scaler, and the regressor takes one
    /// gradient step on the scaled row. The scaler statistics therefore
    /// drift relative to a global refit; the protocol accepts that.
    pub fn learn(&mut self, row: ArrayView1<'_, f64>, actual_cost: f64) -> ModelResult<()> {
        self.scaler.partial_fit(row)?;
        let scaled = self.scaler.transform(row)?;
        self.regressor.partial_fit(scaled.view(), actual_cost)
    }

    /// Convenience: extract features under the embedded schema.
    pub fn extract(&self, task: &crate::task::TaskDescription) -> Array1<f64> {
        self.schema.extract(task)
    }
}

#[cfg(test)]
mod tests {
    use super::CostModel;
    use crate::{
        error::ModelError,
        schema::FeatureSchema,
        task::TaskDescription,
    };

    fn sample_task() -> TaskDescription {
        TaskDescription::new("Build dashboard", "Charts over the analytics API", ["frontend"].as_slice())
    }

    #[test]
    fn fresh_model_validates_and_predicts_zero() {
        let model = CostModel::new(FeatureSchema::default());
        model.validate().unwrap();

        let row = model.extract(&sample_task());
        assert_eq!(model.predict(row.view()).unwrap(), 0.0);
    }

    #[test]
    fn learn_mutates_both_stages() {
        let mut model = CostModel::new(FeatureSchema::default());
        let row = model.extract(&sample_task());

        model.learn(row.view(), 120.0).unwrap();
        assert_eq!(model.scaler().samples_seen(), 1);
        assert_eq!(model.regressor().steps(), 2);
    }

    #[test]
    fn two_identical_updates_are_two_distinct_steps() {
        let mut model = CostModel::new(FeatureSchema::default());
        let row = model.extract(&sample_task());

        model.learn(row.view(), 80.0).unwrap();
        let after_one = model.regressor().intercept();
        model.learn(row.view(), 80.0).unwrap();
        let after_two = model.regressor().intercept();

        assert_ne!(after_one, after_two);
        assert_eq!(model.scaler().samples_seen(), 2);
    }

    #[test]
    fn serde_roundtrip_preserves_parameters() {
        let mut model = CostModel::new(FeatureSchema::default());
        let row = model.extract(&sample_task());
        model.learn(row.view(), 95.0).unwrap();

        let json = serde_json::to_string(&model).unwrap();
        let back: CostModel = serde_json::from_str(&json).unwrap();
        back.validate().unwrap();

        // Bit-exact reload: a restarted process must resume the step
        // schedule from the same parameters it wrote out.
        assert_eq!(back.regressor().intercept(), model.regressor().intercept());
        assert_eq!(back.regressor().weights(), model.regressor().weights());
        assert_eq!(back.scaler().mean(), model.scaler().mean());
        assert_eq!(back.scaler().samples_seen(), 1);
    }

    #[test]
    fn validate_rejects_width_mismatch() {
        let model = CostModel::new(FeatureSchema::default());
        let mut json: serde_json::Value = serde_json::to_value(&model).unwrap();
        // Drop one vocabulary entry behind the fitted stages' back.
        json["schema"]["vocabulary"]
            .as_array_mut()
            .unwrap()
            .pop();

        let tampered: CostModel = serde_json::from_value(json).unwrap();
        let err = tampered.validate().unwrap_err();
        assert!(matches!(err, ModelError::SchemaMismatch(_)));
    }
}
