use thiserror::Error;

use crate::shared::domain::model::enums::validation_error::ValidationError;

#[derive(Debug, Error)]
pub enum SpacesDomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("space not found: {0}")]
    SpaceNotFound(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
