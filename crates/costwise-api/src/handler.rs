use async_trait::async_trait;

use costwise_model::TaskDescription;

use crate::error::ApiError;

/// Cost service API handler.
///
/// This trait abstracts the backend implementation, allowing users to:
/// - Use the provided [`crate::CostServiceAdapter`]
/// - Implement custom handlers with additional logic (auth, rate limiting, etc.)
#[async_trait]
pub trait ApiHandler: Send + Sync + 'static {
    /// Predict the cost of a task.
    async fn predict_cost(&self, task: TaskDescription) -> Result<i64, ApiError>;

    /// Feed one ground-truth cost back into the model.
    ///
    /// Returns the label that was learned, echoed back as confirmation.
    async fn learn_cost(&self, task: TaskDescription, actual_cost: f64) -> Result<f64, ApiError>;

    /// Whether a model is currently loaded and able to serve.
    fn model_loaded(&self) -> bool;
}
