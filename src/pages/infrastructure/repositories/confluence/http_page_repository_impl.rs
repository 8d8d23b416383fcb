use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    pages::{
        domain::model::{
            entities::page::Page,
            enums::pages_domain_error::PagesDomainError,
            value_objects::{page_id::PageId, page_title::PageTitle},
        },
        infrastructure::repositories::page_repository::PageRepository,
    },
    shared::{
        domain::model::paged_result::PagedResult,
        infrastructure::http::confluence_http_client::{
            ConfluenceHttpClient, ConfluenceHttpError, next_cursor,
        },
    },
    spaces::domain::model::value_objects::space_id::SpaceId,
};

const PAGES_PATH: &str = "api/v2/pages";
const SPACES_PATH: &str = "api/v2/spaces";
const SEARCH_PATH: &str = "rest/api/search";

#[derive(Debug, Deserialize)]
struct PageListDto {
    #[serde(default)]
    results: Vec<PageDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageDto {
    id: String,
    title: String,
    #[serde(default)]
    space_id: Option<String>,
    #[serde(default)]
    parent_id: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    version: Option<VersionDto>,
    #[serde(default)]
    body: Option<BodyDto>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct VersionDto {
    number: u32,
}

#[derive(Debug, Deserialize)]
struct BodyDto {
    storage: Option<StorageDto>,
}

#[derive(Debug, Deserialize)]
struct StorageDto {
    value: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponseDto {
    #[serde(default)]
    results: Vec<SearchResultDto>,
}

#[derive(Debug, Deserialize)]
struct SearchResultDto {
    content: Option<SearchContentDto>,
}

#[derive(Debug, Deserialize)]
struct SearchContentDto {
    id: String,
    title: String,
    #[serde(default)]
    status: Option<String>,
}

pub struct HttpPageRepositoryImpl {
    http_client: Arc<ConfluenceHttpClient>,
}

impl HttpPageRepositoryImpl {
    pub fn new(http_client: Arc<ConfluenceHttpClient>) -> Self {
        Self { http_client }
    }

    fn dto_to_entity(dto: PageDto) -> Result<Page, PagesDomainError> {
        Ok(Page::restore(
            PageId::new(dto.id)?,
            dto.title,
            dto.space_id,
            dto.parent_id,
            dto.status.unwrap_or_else(|| "current".to_string()),
            dto.version.map(|version| version.number),
            dto.body
                .and_then(|body| body.storage)
                .map(|storage| storage.value),
            dto.created_at,
        ))
    }

    fn body_to_entity(body: Value) -> Result<Page, PagesDomainError> {
        let dto: PageDto = serde_json::from_value(body).map_err(map_decode_error)?;
        Self::dto_to_entity(dto)
    }

    async fn fetch_list(
        &self,
        path: &str,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<PagedResult<Page>, PagesDomainError> {
        let mut query = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }

        let body = self
            .http_client
            .get_json(path, &query)
            .await
            .map_err(map_http_error)?;
        let cursor = next_cursor(&body);

        let list: PageListDto = serde_json::from_value(body).map_err(map_decode_error)?;
        let pages = list
            .results
            .into_iter()
            .map(Self::dto_to_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PagedResult::new(pages, cursor))
    }
}

#[async_trait]
impl PageRepository for HttpPageRepositoryImpl {
    async fn find_by_id(&self, page_id: &PageId) -> Result<Option<Page>, PagesDomainError> {
        let path = format!("{PAGES_PATH}/{}", page_id.value());
        let query = [("body-format", "storage".to_string())];

        match self.http_client.get_json(&path, &query).await {
            Ok(body) => Self::body_to_entity(body).map(Some),
            Err(error) if error.is_not_found() => Ok(None),
            Err(error) => Err(map_http_error(error)),
        }
    }

    async fn create(
        &self,
        space_id: &SpaceId,
        title: &PageTitle,
        body: &str,
        parent_id: Option<&PageId>,
    ) -> Result<Page, PagesDomainError> {
        let mut payload = json!({
            "spaceId": space_id.value(),
            "status": "current",
            "title": title.value(),
            "body": {
                "representation": "storage",
                "value": body,
            },
        });
        if let Some(parent_id) = parent_id {
            payload["parentId"] = Value::String(parent_id.value().to_string());
        }

        let response = self
            .http_client
            .post_json(PAGES_PATH, &payload)
            .await
            .map_err(map_http_error)?;

        Self::body_to_entity(response)
    }

    async fn update(
        &self,
        page_id: &PageId,
        title: &PageTitle,
        body: &str,
        version: u32,
        version_message: Option<&str>,
    ) -> Result<Page, PagesDomainError> {
        let path = format!("{PAGES_PATH}/{}", page_id.value());
        let mut payload = json!({
            "id": page_id.value(),
            "status": "current",
            "title": title.value(),
            "body": {
                "representation": "storage",
                "value": body,
            },
            "version": {
                "number": version,
            },
        });
        if let Some(message) = version_message {
            payload["version"]["message"] = Value::String(message.to_string());
        }

        match self.http_client.put_json(&path, &payload).await {
            Ok(response) => Self::body_to_entity(response),
            Err(error) if error.is_not_found() => {
                Err(PagesDomainError::PageNotFound(page_id.value().to_string()))
            }
            Err(error) => Err(map_http_error(error)),
        }
    }

    async fn search(&self, cql: &str, limit: Option<u32>) -> Result<Vec<Page>, PagesDomainError> {
        let mut query = vec![("cql", cql.to_string())];
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }

        let body = self
            .http_client
            .get_json(SEARCH_PATH, &query)
            .await
            .map_err(map_http_error)?;

        let response: SearchResponseDto =
            serde_json::from_value(body).map_err(map_decode_error)?;

        response
            .results
            .into_iter()
            .filter_map(|result| result.content)
            .map(|content| -> Result<Page, PagesDomainError> {
                Ok(Page::restore(
                    PageId::new(content.id)?,
                    content.title,
                    None,
                    None,
                    content.status.unwrap_or_else(|| "current".to_string()),
                    None,
                    None,
                    None,
                ))
            })
            .collect()
    }

    async fn list_by_space(
        &self,
        space_id: &SpaceId,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<PagedResult<Page>, PagesDomainError> {
        let path = format!("{SPACES_PATH}/{}/pages", space_id.value());
        self.fetch_list(&path, limit, cursor).await
    }

    async fn list_children(
        &self,
        page_id: &PageId,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<PagedResult<Page>, PagesDomainError> {
        let path = format!("{PAGES_PATH}/{}/children", page_id.value());
        self.fetch_list(&path, limit, cursor).await
    }
}

fn map_http_error(error: ConfluenceHttpError) -> PagesDomainError {
    PagesDomainError::InfrastructureError(error.to_string())
}

fn map_decode_error(error: serde_json::Error) -> PagesDomainError {
    PagesDomainError::InfrastructureError(format!("unexpected page payload: {error}"))
}
