use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    search::{
        domain::model::{
            entities::content_search_result::ContentSearchResult,
            enums::search_domain_error::SearchDomainError, value_objects::cql_query::CqlQuery,
        },
        infrastructure::repositories::content_search_repository::ContentSearchRepository,
    },
    shared::{
        domain::model::paged_result::PagedResult,
        infrastructure::http::confluence_http_client::{ConfluenceHttpClient, next_cursor},
    },
};

const SEARCH_PATH: &str = "rest/api/search";

#[derive(Debug, Deserialize)]
struct SearchResponseDto {
    #[serde(default)]
    results: Vec<SearchResultDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultDto {
    content: Option<ContentDto>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    excerpt: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    last_modified: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentDto {
    id: String,
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    title: Option<String>,
}

pub struct HttpContentSearchRepositoryImpl {
    http_client: Arc<ConfluenceHttpClient>,
}

impl HttpContentSearchRepositoryImpl {
    pub fn new(http_client: Arc<ConfluenceHttpClient>) -> Self {
        Self { http_client }
    }

    /// Results without a content item (users, spaces) are skipped.
    fn dto_to_entity(dto: SearchResultDto) -> Option<ContentSearchResult> {
        let content = dto.content?;
        let title = content.title.or(dto.title).unwrap_or_default();
        let last_modified = dto
            .last_modified
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|parsed| parsed.with_timezone(&Utc));

        Some(ContentSearchResult::restore(
            content.id,
            content.content_type,
            title,
            dto.excerpt.filter(|excerpt| !excerpt.trim().is_empty()),
            dto.url,
            last_modified,
        ))
    }
}

#[async_trait]
impl ContentSearchRepository for HttpContentSearchRepositoryImpl {
    async fn search(
        &self,
        cql: &CqlQuery,
        limit: Option<u32>,
        start: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<PagedResult<ContentSearchResult>, SearchDomainError> {
        let mut query = vec![("cql", cql.value().to_string())];
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(start) = start {
            query.push(("start", start.to_string()));
        }
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }

        let body = self
            .http_client
            .get_json(SEARCH_PATH, &query)
            .await
            .map_err(|e| SearchDomainError::InfrastructureError(e.to_string()))?;
        let cursor = next_cursor(&body);

        let response: SearchResponseDto = serde_json::from_value(body).map_err(|e| {
            SearchDomainError::InfrastructureError(format!("unexpected search payload: {e}"))
        })?;

        let results = response
            .results
            .into_iter()
            .filter_map(Self::dto_to_entity)
            .collect();

        Ok(PagedResult::new(results, cursor))
    }
}
