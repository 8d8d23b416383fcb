use async_trait::async_trait;

use crate::{
    shared::domain::model::paged_result::PagedResult,
    spaces::domain::model::{
        entities::space::Space,
        enums::spaces_domain_error::SpacesDomainError,
        queries::{
            get_space_by_id_query::GetSpaceByIdQuery, get_space_by_key_query::GetSpaceByKeyQuery,
            get_spaces_query::GetSpacesQuery,
        },
    },
};

#[async_trait]
pub trait SpaceQueryService: Send + Sync {
    async fn handle_get_spaces(
        &self,
        query: GetSpacesQuery,
    ) -> Result<PagedResult<Space>, SpacesDomainError>;

    async fn handle_get_by_key(&self, query: GetSpaceByKeyQuery)
    -> Result<Space, SpacesDomainError>;

    async fn handle_get_by_id(&self, query: GetSpaceByIdQuery) -> Result<Space, SpacesDomainError>;
}
