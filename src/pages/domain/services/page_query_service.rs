use async_trait::async_trait;

use crate::{
    pages::domain::model::{
        entities::page::Page,
        enums::pages_domain_error::PagesDomainError,
        queries::{
            get_child_pages_query::GetChildPagesQuery, get_page_query::GetPageQuery,
            get_pages_by_space_query::GetPagesBySpaceQuery, search_pages_query::SearchPagesQuery,
        },
    },
    shared::domain::model::paged_result::PagedResult,
};

#[async_trait]
pub trait PageQueryService: Send + Sync {
    async fn handle_get(&self, query: GetPageQuery) -> Result<Page, PagesDomainError>;

    async fn handle_search(&self, query: SearchPagesQuery) -> Result<Vec<Page>, PagesDomainError>;

    async fn handle_list_by_space(
        &self,
        query: GetPagesBySpaceQuery,
    ) -> Result<PagedResult<Page>, PagesDomainError>;

    async fn handle_list_children(
        &self,
        query: GetChildPagesQuery,
    ) -> Result<PagedResult<Page>, PagesDomainError>;
}
