use crate::pages::domain::model::{
    enums::pages_domain_error::PagesDomainError, value_objects::page_id::PageId,
};

#[derive(Clone, Debug)]
pub struct GetPageQuery {
    page_id: PageId,
}

impl GetPageQuery {
    pub fn new(page_id: String) -> Result<Self, PagesDomainError> {
        Ok(Self {
            page_id: PageId::new(page_id)?,
        })
    }

    pub fn page_id(&self) -> &PageId {
        &self.page_id
    }
}
