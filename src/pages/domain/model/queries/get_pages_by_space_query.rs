use crate::{
    pages::domain::model::enums::pages_domain_error::PagesDomainError,
    spaces::domain::model::value_objects::space_id::SpaceId,
};

#[derive(Clone, Debug)]
pub struct GetPagesBySpaceQuery {
    space_id: SpaceId,
    limit: Option<u32>,
    cursor: Option<String>,
}

impl GetPagesBySpaceQuery {
    pub fn new(
        space_id: String,
        limit: Option<u32>,
        cursor: Option<String>,
    ) -> Result<Self, PagesDomainError> {
        Ok(Self {
            space_id: SpaceId::new(space_id)?,
            limit,
            cursor,
        })
    }

    pub fn space_id(&self) -> &SpaceId {
        &self.space_id
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }
}
