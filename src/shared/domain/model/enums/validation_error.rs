use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ValidationError {
    #[error("Expected string, received {received}")]
    TypeMismatch { received: &'static str },

    #[error("{label} cannot be empty")]
    Empty { label: &'static str },
}

impl ValidationError {
    pub fn reason_code(&self) -> &'static str {
        match self {
            ValidationError::TypeMismatch { .. } => "type_mismatch",
            ValidationError::Empty { .. } => "empty",
        }
    }
}
