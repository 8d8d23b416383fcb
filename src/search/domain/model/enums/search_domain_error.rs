use thiserror::Error;

use crate::shared::domain::model::enums::validation_error::ValidationError;

#[derive(Debug, Error)]
pub enum SearchDomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("search requires either cql or query")]
    MissingSearchCriteria,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
