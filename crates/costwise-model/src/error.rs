use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("feature row has {actual} columns, model expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("invalid model: {0}")]
    Invalid(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
