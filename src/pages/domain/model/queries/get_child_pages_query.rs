use crate::pages::domain::model::{
    enums::pages_domain_error::PagesDomainError, value_objects::page_id::PageId,
};

#[derive(Clone, Debug)]
pub struct GetChildPagesQuery {
    page_id: PageId,
    limit: Option<u32>,
    cursor: Option<String>,
}

impl GetChildPagesQuery {
    pub fn new(
        page_id: String,
        limit: Option<u32>,
        cursor: Option<String>,
    ) -> Result<Self, PagesDomainError> {
        Ok(Self {
            page_id: PageId::new(page_id)?,
            limit,
            cursor,
        })
    }

    pub fn page_id(&self) -> &PageId {
        &self.page_id
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }
}
