use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use costwise_model::TaskDescription;

use crate::{error::ApiError, handler::ApiHandler};

/// HTTP API service builder.
pub struct HttpApi<H> {
    handler: Arc<H>,
}

impl<H> HttpApi<H>
where
    H: ApiHandler,
{
    /// Create new HTTP API with the given handler.
    pub fn new(handler: Arc<H>) -> Self {
        Self { handler }
    }

    /// Build axum router with mounted endpoints.
    ///
    /// Routes:
    /// - GET  /        - Liveness status
    /// - POST /predict - Predict task cost
    /// - POST /update  - Feed ground-truth cost back into the model
    ///
    /// CORS is wide open: the service is meant to sit behind local
    /// tooling and development frontends.
    pub fn router(self) -> Router {
        Router::new()
            .route("/", get(status::<H>))
            .route("/predict", post(predict::<H>))
            .route("/update", post(update::<H>))
            .with_state(self.handler)
            .layer(CorsLayer::permissive())
    }
}

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct StatusResponse {
    status: String,
    model_loaded: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct PredictResponse {
    predicted_cost: i64,
}

#[derive(Debug, Deserialize)]
struct UpdateRequest {
    #[serde(flatten)]
    task: TaskDescription,
    actual_cost: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct UpdateResponse {
    status: String,
    new_cost_learned: f64,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
async fn status<H>(State(handler): State<Arc<H>>) -> impl IntoResponse
where
    H: ApiHandler,
{
    Json(StatusResponse {
        status: "cost service running".to_string(),
        model_loaded: handler.model_loaded(),
    })
}

/// POST /predict
async fn predict<H>(
    State(handler): State<Arc<H>>,
    Json(task): Json<TaskDescription>,
) -> Result<impl IntoResponse, ApiError>
where
    H: ApiHandler,
{
    let predicted_cost = handler.predict_cost(task).await?;

    Ok(Json(PredictResponse { predicted_cost }))
}

/// POST /update
async fn update<H>(
    State(handler): State<Arc<H>>,
    Json(req): Json<UpdateRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    H: ApiHandler,
{
    if !req.actual_cost.is_finite() {
        return Err(ApiError::InvalidRequest(
            "actual_cost must be a finite number".into(),
        ));
    }
    if req.actual_cost < 0.0 {
        return Err(ApiError::InvalidRequest(
            "actual_cost cannot be negative".into(),
        ));
    }

    let new_cost_learned = handler.learn_cost(req.task, req.actual_cost).await?;

    Ok(Json(UpdateResponse {
        status: "model updated".to_string(),
        new_cost_learned,
    }))
}
