use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    shared::{
        domain::model::paged_result::PagedResult,
        infrastructure::http::confluence_http_client::{
            ConfluenceHttpClient, ConfluenceHttpError, next_cursor,
        },
    },
    spaces::{
        domain::model::{
            entities::space::Space,
            enums::spaces_domain_error::SpacesDomainError,
            value_objects::{space_id::SpaceId, space_key::SpaceKey},
        },
        infrastructure::repositories::space_repository::SpaceRepository,
    },
};

const SPACES_PATH: &str = "api/v2/spaces";

#[derive(Debug, Deserialize)]
struct SpaceListDto {
    #[serde(default)]
    results: Vec<SpaceDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpaceDto {
    id: String,
    key: String,
    name: String,
    #[serde(rename = "type", default)]
    space_type: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    description: Option<DescriptionDto>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct DescriptionDto {
    plain: Option<PlainValueDto>,
}

#[derive(Debug, Deserialize)]
struct PlainValueDto {
    value: String,
}

pub struct HttpSpaceRepositoryImpl {
    http_client: Arc<ConfluenceHttpClient>,
}

impl HttpSpaceRepositoryImpl {
    pub fn new(http_client: Arc<ConfluenceHttpClient>) -> Self {
        Self { http_client }
    }

    fn dto_to_entity(dto: SpaceDto) -> Result<Space, SpacesDomainError> {
        Ok(Space::restore(
            SpaceId::new(dto.id)?,
            SpaceKey::new(dto.key)?,
            dto.name,
            dto.space_type.unwrap_or_else(|| "global".to_string()),
            dto.status.unwrap_or_else(|| "current".to_string()),
            dto.description
                .and_then(|description| description.plain)
                .map(|plain| plain.value)
                .filter(|value| !value.is_empty()),
            dto.created_at,
        ))
    }

    async fn fetch_list(
        &self,
        query: &[(&str, String)],
    ) -> Result<PagedResult<Space>, SpacesDomainError> {
        let body = self
            .http_client
            .get_json(SPACES_PATH, query)
            .await
            .map_err(map_http_error)?;
        let cursor = next_cursor(&body);

        let list: SpaceListDto = serde_json::from_value(body).map_err(map_decode_error)?;
        let spaces = list
            .results
            .into_iter()
            .map(Self::dto_to_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PagedResult::new(spaces, cursor))
    }
}

#[async_trait]
impl SpaceRepository for HttpSpaceRepositoryImpl {
    async fn list(
        &self,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<PagedResult<Space>, SpacesDomainError> {
        let mut query = vec![("description-format", "plain".to_string())];
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }

        self.fetch_list(&query).await
    }

    async fn find_by_key(&self, space_key: &SpaceKey) -> Result<Option<Space>, SpacesDomainError> {
        let query = [
            ("keys", space_key.value().to_string()),
            ("description-format", "plain".to_string()),
            ("limit", "1".to_string()),
        ];

        let spaces = self.fetch_list(&query).await?;
        Ok(spaces.into_items().into_iter().next())
    }

    async fn find_by_id(&self, space_id: &SpaceId) -> Result<Option<Space>, SpacesDomainError> {
        let path = format!("{SPACES_PATH}/{}", space_id.value());
        let query = [("description-format", "plain".to_string())];

        let body = match self.http_client.get_json(&path, &query).await {
            Ok(body) => body,
            Err(error) if error.is_not_found() => return Ok(None),
            Err(error) => return Err(map_http_error(error)),
        };

        let dto: SpaceDto = serde_json::from_value(body).map_err(map_decode_error)?;
        Ok(Some(Self::dto_to_entity(dto)?))
    }
}

fn map_http_error(error: ConfluenceHttpError) -> SpacesDomainError {
    SpacesDomainError::InfrastructureError(error.to_string())
}

fn map_decode_error(error: serde_json::Error) -> SpacesDomainError {
    SpacesDomainError::InfrastructureError(format!("unexpected space payload: {error}"))
}
