use thiserror::Error;

use crate::shared::domain::model::enums::validation_error::ValidationError;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    #[error("unknown operation {domain}.{operation}")]
    UnknownOperation { domain: String, operation: String },

    #[error("confluence request failed: {0}")]
    Upstream(String),

    #[error("response serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
