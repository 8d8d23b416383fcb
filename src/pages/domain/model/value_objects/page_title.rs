use crate::shared::domain::model::enums::validation_error::ValidationError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PageTitle(String);

impl PageTitle {
    pub const LABEL: &'static str = "Title";

    pub fn new(value: String) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { label: Self::LABEL });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
