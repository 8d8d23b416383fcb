use thiserror::Error;

use crate::shared::domain::model::enums::validation_error::ValidationError;

#[derive(Debug, Error)]
pub enum PagesDomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("page not found: {0}")]
    PageNotFound(String),

    #[error("page update requires a new title or new content")]
    MissingPageChanges,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
