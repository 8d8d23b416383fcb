use async_trait::async_trait;

use crate::{
    search::domain::model::{
        entities::content_search_result::ContentSearchResult,
        enums::search_domain_error::SearchDomainError,
        queries::search_content_query::SearchContentQuery,
    },
    shared::domain::model::paged_result::PagedResult,
};

#[async_trait]
pub trait ContentSearchQueryService: Send + Sync {
    async fn handle_search(
        &self,
        query: SearchContentQuery,
    ) -> Result<PagedResult<ContentSearchResult>, SearchDomainError>;
}
