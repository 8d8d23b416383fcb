use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    search::{
        domain::{
            model::{
                entities::content_search_result::ContentSearchResult,
                enums::search_domain_error::SearchDomainError,
                queries::search_content_query::SearchContentQuery,
            },
            services::content_search_query_service::ContentSearchQueryService,
        },
        infrastructure::repositories::content_search_repository::ContentSearchRepository,
    },
    shared::domain::model::paged_result::PagedResult,
};

pub struct ContentSearchQueryServiceImpl {
    search_repository: Arc<dyn ContentSearchRepository>,
}

impl ContentSearchQueryServiceImpl {
    pub fn new(search_repository: Arc<dyn ContentSearchRepository>) -> Self {
        Self { search_repository }
    }
}

#[async_trait]
impl ContentSearchQueryService for ContentSearchQueryServiceImpl {
    async fn handle_search(
        &self,
        query: SearchContentQuery,
    ) -> Result<PagedResult<ContentSearchResult>, SearchDomainError> {
        self.search_repository
            .search(query.cql(), query.limit(), query.start(), query.cursor())
            .await
    }
}
