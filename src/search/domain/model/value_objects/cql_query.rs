use crate::shared::domain::model::{cql::quote_cql_literal, enums::validation_error::ValidationError};

/// A Confluence Query Language expression.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CqlQuery(String);

impl CqlQuery {
    pub const CQL_LABEL: &'static str = "CQL";
    pub const TEXT_LABEL: &'static str = "Query";

    pub fn new(value: String) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                label: Self::CQL_LABEL,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Full-text search over all content types.
    pub fn from_text(text: String) -> Result<Self, ValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                label: Self::TEXT_LABEL,
            });
        }

        Ok(Self(format!("text ~ {}", quote_cql_literal(trimmed))))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
