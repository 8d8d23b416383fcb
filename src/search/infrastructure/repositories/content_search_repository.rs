use async_trait::async_trait;

use crate::{
    search::domain::model::{
        entities::content_search_result::ContentSearchResult,
        enums::search_domain_error::SearchDomainError, value_objects::cql_query::CqlQuery,
    },
    shared::domain::model::paged_result::PagedResult,
};

#[async_trait]
pub trait ContentSearchRepository: Send + Sync {
    async fn search(
        &self,
        cql: &CqlQuery,
        limit: Option<u32>,
        start: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<PagedResult<ContentSearchResult>, SearchDomainError>;
}
