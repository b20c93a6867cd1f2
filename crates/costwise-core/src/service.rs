//! Predictor and online updater over the shared model store.
use std::sync::Arc;

use tracing::{debug, info, instrument};

use costwise_model::TaskDescription;

use crate::{
    error::CoreError,
    metrics::{MetricsHandle, UpdateOutcome, noop_metrics},
    store::ModelStore,
};

/// Minimum cost the service will ever quote. Business rule: no task costs
/// less than 10 units.
const COST_FLOOR: f64 = 10.0;

/// Prediction and online-update operations over one [`ModelStore`].
///
/// Prediction takes a shared read of the model slot; updates take the
/// exclusive guard for the entire three-step protocol plus persistence,
/// so concurrent updates are serialized instead of interleaving.
pub struct CostService {
    store: Arc<ModelStore>,
    metrics: MetricsHandle,
}

impl CostService {
    /// Service without metrics collection.
    pub fn new(store: Arc<ModelStore>) -> Self {
        Self::with_metrics(store, noop_metrics())
    }

    /// Service with an injected metrics backend.
    pub fn with_metrics(store: Arc<ModelStore>, metrics: MetricsHandle) -> Self {
        Self { store, metrics }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<ModelStore> {
        &self.store
    }

    /// Whether a model is currently available to serve.
    pub fn model_loaded(&self) -> bool {
        self.store.is_loaded()
    }

    /// Predict the cost of a task.
    ///
    /// Extracts features under the loaded model's own schema, applies the
    /// two stages in order, clamps the raw output to a floor of 10.0 and
    /// truncates to an integer. Never mutates model state.
    #[instrument(level = "debug", skip(self, task), fields(title = %task.title))]
    pub fn predict(&self, task: &TaskDescription) -> Result<i64, CoreError> {
        let guard = self.store.model();
        let model = guard.as_ref().ok_or(CoreError::ModelUnavailable)?;

        let row = model.extract(task);
        let raw = model.predict(row.view())?;
        let cost = raw.max(COST_FLOOR) as i64;

        debug!(raw, cost, "prediction served");
        self.metrics.record_prediction(cost);
        Ok(cost)
    }

    /// Apply one ground-truth feedback sample to the model.
    ///
    /// Under the exclusive guard: scaler partial-fit on the raw row,
    /// transform through the just-updated scaler, one regressor gradient
    /// step on the scaled row, then whole-artifact persistence. Returns
    /// the label that was learned, echoed back as confirmation.
    ///
    /// On failure the in-memory model may already be mutated (e.g. both
    /// stages stepped but the disk write failed); the error carries the
    /// cause and nothing is rolled back.
    #[instrument(level = "debug", skip(self, task), fields(title = %task.title, actual_cost))]
    pub fn update(&self, task: &TaskDescription, actual_cost: f64) -> Result<f64, CoreError> {
        let mut guard = self.store.model_mut();
        let model = guard.as_mut().ok_or(CoreError::ModelUnavailable)?;

        let row = model.extract(task);
        let applied = model
            .learn(row.view(), actual_cost)
            .map_err(|e| e.to_string())
            .and_then(|()| self.store.persist(model).map_err(|e| e.to_string()));

        match applied {
            Ok(()) => {
                info!(actual_cost, "model updated and persisted");
                self.metrics.record_update(UpdateOutcome::Applied);
                Ok(actual_cost)
            }
            Err(cause) => {
                self.metrics.record_update(UpdateOutcome::Failed);
                Err(CoreError::UpdateFailed(cause))
            }
        }
    }
}
