use crate::{
    pages::domain::model::enums::pages_domain_error::PagesDomainError,
    shared::domain::model::enums::validation_error::ValidationError,
    spaces::domain::model::value_objects::space_key::SpaceKey,
};

#[derive(Clone, Debug)]
pub struct SearchPagesQuery {
    text: String,
    space_key: Option<SpaceKey>,
    limit: Option<u32>,
}

impl SearchPagesQuery {
    pub const TEXT_LABEL: &'static str = "Query";

    pub fn new(
        text: String,
        space_key: Option<String>,
        limit: Option<u32>,
    ) -> Result<Self, PagesDomainError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::Empty {
                label: Self::TEXT_LABEL,
            }
            .into());
        }

        Ok(Self {
            text: text.to_string(),
            space_key: space_key.map(SpaceKey::new).transpose()?,
            limit,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn space_key(&self) -> Option<&SpaceKey> {
        self.space_key.as_ref()
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }
}
