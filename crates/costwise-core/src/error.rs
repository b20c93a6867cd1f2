use thiserror::Error;

use costwise_model::ModelError;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum CoreError {
    /// No model artifact was found at startup and none has been
    /// provisioned since. Surfaced to callers as service-unavailable;
    /// never retried here.
    #[error("no model loaded")]
    ModelUnavailable,

    /// Something inside the three-step online update went wrong. Carries
    /// the underlying cause message. The in-memory model may be left
    /// partially mutated when only persistence failed; no rollback is
    /// performed.
    #[error("model update failed: {0}")]
    UpdateFailed(String),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

pub type CoreResult<T> = Result<T, CoreError>;
