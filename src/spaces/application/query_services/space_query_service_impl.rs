use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    shared::domain::model::paged_result::PagedResult,
    spaces::{
        domain::{
            model::{
                entities::space::Space,
                enums::spaces_domain_error::SpacesDomainError,
                queries::{
                    get_space_by_id_query::GetSpaceByIdQuery,
                    get_space_by_key_query::GetSpaceByKeyQuery, get_spaces_query::GetSpacesQuery,
                },
            },
            services::space_query_service::SpaceQueryService,
        },
        infrastructure::repositories::space_repository::SpaceRepository,
    },
};

pub struct SpaceQueryServiceImpl {
    space_repository: Arc<dyn SpaceRepository>,
}

impl SpaceQueryServiceImpl {
    pub fn new(space_repository: Arc<dyn SpaceRepository>) -> Self {
        Self { space_repository }
    }
}

#[async_trait]
impl SpaceQueryService for SpaceQueryServiceImpl {
    async fn handle_get_spaces(
        &self,
        query: GetSpacesQuery,
    ) -> Result<PagedResult<Space>, SpacesDomainError> {
        self.space_repository
            .list(query.limit(), query.cursor())
            .await
    }

    async fn handle_get_by_key(
        &self,
        query: GetSpaceByKeyQuery,
    ) -> Result<Space, SpacesDomainError> {
        self.space_repository
            .find_by_key(query.space_key())
            .await?
            .ok_or_else(|| SpacesDomainError::SpaceNotFound(query.space_key().value().to_string()))
    }

    async fn handle_get_by_id(&self, query: GetSpaceByIdQuery) -> Result<Space, SpacesDomainError> {
        self.space_repository
            .find_by_id(query.space_id())
            .await?
            .ok_or_else(|| SpacesDomainError::SpaceNotFound(query.space_id().value().to_string()))
    }
}
