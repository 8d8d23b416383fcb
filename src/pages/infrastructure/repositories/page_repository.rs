use async_trait::async_trait;

use crate::{
    pages::domain::model::{
        entities::page::Page,
        enums::pages_domain_error::PagesDomainError,
        value_objects::{page_id::PageId, page_title::PageTitle},
    },
    shared::domain::model::paged_result::PagedResult,
    spaces::domain::model::value_objects::space_id::SpaceId,
};

#[async_trait]
pub trait PageRepository: Send + Sync {
    async fn find_by_id(&self, page_id: &PageId) -> Result<Option<Page>, PagesDomainError>;

    async fn create(
        &self,
        space_id: &SpaceId,
        title: &PageTitle,
        body: &str,
        parent_id: Option<&PageId>,
    ) -> Result<Page, PagesDomainError>;

    async fn update(
        &self,
        page_id: &PageId,
        title: &PageTitle,
        body: &str,
        version: u32,
        version_message: Option<&str>,
    ) -> Result<Page, PagesDomainError>;

    async fn search(&self, cql: &str, limit: Option<u32>) -> Result<Vec<Page>, PagesDomainError>;

    async fn list_by_space(
        &self,
        space_id: &SpaceId,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<PagedResult<Page>, PagesDomainError>;

    async fn list_children(
        &self,
        page_id: &PageId,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<PagedResult<Page>, PagesDomainError>;
}
