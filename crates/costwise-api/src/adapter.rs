use std::sync::Arc;

use async_trait::async_trait;

use costwise_core::CostService;
use costwise_model::TaskDescription;

use crate::error::ApiError;
use crate::handler::ApiHandler;

/// Adapter that bridges [`CostService`] to [`ApiHandler`].
///
/// The core operations are synchronous and CPU-bound (sub-millisecond),
/// so they run inline on the request task rather than being shipped to a
/// blocking pool.
pub struct CostServiceAdapter {
    service: Arc<CostService>,
}

impl CostServiceAdapter {
    /// Create a new adapter wrapping the given service.
    pub fn new(service: Arc<CostService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ApiHandler for CostServiceAdapter {
    async fn predict_cost(&self, task: TaskDescription) -> Result<i64, ApiError> {
        self.service.predict(&task).map_err(ApiError::from)
    }

    async fn learn_cost(&self, task: TaskDescription, actual_cost: f64) -> Result<f64, ApiError> {
        self.service
            .update(&task, actual_cost)
            .map_err(ApiError::from)
    }

    fn model_loaded(&self) -> bool {
        self.service.model_loaded()
    }
}
