use crate::shared::domain::model::enums::validation_error::ValidationError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SpaceKey(String);

impl SpaceKey {
    pub const LABEL: &'static str = "Space key";

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
