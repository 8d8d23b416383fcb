use async_trait::async_trait;

use crate::{
    shared::domain::model::paged_result::PagedResult,
    spaces::domain::model::{
        entities::space::Space,
        enums::spaces_domain_error::SpacesDomainError,
        value_objects::{space_id::SpaceId, space_key::SpaceKey},
    },
};

#[async_trait]
pub trait SpaceRepository: Send + Sync {
    async fn list(
        &self,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<PagedResult<Space>, SpacesDomainError>;

    async fn find_by_key(&self, space_key: &SpaceKey) -> Result<Option<Space>, SpacesDomainError>;

    async fn find_by_id(&self, space_id: &SpaceId) -> Result<Option<Space>, SpacesDomainError>;
}
