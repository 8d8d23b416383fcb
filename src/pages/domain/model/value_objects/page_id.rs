use crate::shared::domain::{
    model::enums::validation_error::ValidationError,
    validation::identifier_validator::PAGE_ID_LABEL,
};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PageId(String);

impl PageId {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                label: PAGE_ID_LABEL,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
