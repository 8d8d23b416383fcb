use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    pages::{
        domain::{
            model::{
                entities::page::Page,
                enums::pages_domain_error::PagesDomainError,
                queries::{
                    get_child_pages_query::GetChildPagesQuery, get_page_query::GetPageQuery,
                    get_pages_by_space_query::GetPagesBySpaceQuery,
                    search_pages_query::SearchPagesQuery,
                },
            },
            services::page_query_service::PageQueryService,
        },
        infrastructure::repositories::page_repository::PageRepository,
    },
    shared::domain::model::{cql::quote_cql_literal, paged_result::PagedResult},
};

pub struct PageQueryServiceImpl {
    page_repository: Arc<dyn PageRepository>,
}

impl PageQueryServiceImpl {
    pub fn new(page_repository: Arc<dyn PageRepository>) -> Self {
        Self { page_repository }
    }
}

fn page_search_cql(query: &SearchPagesQuery) -> String {
    let mut cql = format!("type = page AND text ~ {}", quote_cql_literal(query.text()));
    if let Some(space_key) = query.space_key() {
        cql.push_str(" AND space = ");
        cql.push_str(&quote_cql_literal(space_key.value()));
    }
    cql
}

#[async_trait]
impl PageQueryService for PageQueryServiceImpl {
    async fn handle_get(&self, query: GetPageQuery) -> Result<Page, PagesDomainError> {
        self.page_repository
            .find_by_id(query.page_id())
            .await?
            .ok_or_else(|| PagesDomainError::PageNotFound(query.page_id().value().to_string()))
    }

    async fn handle_search(&self, query: SearchPagesQuery) -> Result<Vec<Page>, PagesDomainError> {
        self.page_repository
            .search(&page_search_cql(&query), query.limit())
            .await
    }

    async fn handle_list_by_space(
        &self,
        query: GetPagesBySpaceQuery,
    ) -> Result<PagedResult<Page>, PagesDomainError> {
        self.page_repository
            .list_by_space(query.space_id(), query.limit(), query.cursor())
            .await
    }

    async fn handle_list_children(
        &self,
        query: GetChildPagesQuery,
    ) -> Result<PagedResult<Page>, PagesDomainError> {
        self.page_repository
            .list_children(query.page_id(), query.limit(), query.cursor())
            .await
    }
}
