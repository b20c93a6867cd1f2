use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use costwise_core::CoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("model not loaded")]
    ModelUnavailable,

    #[error("{0}")]
    UpdateFailed(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::ModelUnavailable => ApiError::ModelUnavailable,
            CoreError::UpdateFailed(cause) => ApiError::UpdateFailed(cause),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::ModelUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::UpdateFailed(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use costwise_core::CoreError;

    use super::ApiError;

    #[test]
    fn status_code_mapping() {
        let cases = [
            (ApiError::ModelUnavailable, StatusCode::SERVICE_UNAVAILABLE),
            (
                ApiError::UpdateFailed("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::InvalidRequest("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Internal("oops".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn core_errors_convert_to_matching_variants() {
        assert!(matches!(
            ApiError::from(CoreError::ModelUnavailable),
            ApiError::ModelUnavailable
        ));
        assert!(matches!(
            ApiError::from(CoreError::UpdateFailed("x".into())),
            ApiError::UpdateFailed(_)
        ));
    }

    #[test]
    fn update_failed_carries_the_cause() {
        let err = ApiError::UpdateFailed("disk full".into());
        assert_eq!(err.to_string(), "disk full");
    }
}
