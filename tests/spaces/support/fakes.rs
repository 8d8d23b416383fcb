use std::sync::Mutex;

use async_trait::async_trait;
use confluence_domain_handlers::{
    shared::domain::model::paged_result::PagedResult,
    spaces::{
        domain::model::{
            entities::space::Space,
            enums::spaces_domain_error::SpacesDomainError,
            value_objects::{space_id::SpaceId, space_key::SpaceKey},
        },
        infrastructure::repositories::space_repository::SpaceRepository,
    },
};

#[derive(Default)]
struct FakeSpaceRepositoryState {
    list_calls: Vec<(Option<u32>, Option<String>)>,
    fail_with: Option<String>,
}

pub struct FakeSpaceRepository {
    spaces: Vec<Space>,
    next_cursor: Option<String>,
    state: Mutex<FakeSpaceRepositoryState>,
}

impl FakeSpaceRepository {
    pub fn with_spaces(spaces: Vec<Space>, next_cursor: Option<&str>) -> Self {
        Self {
            spaces,
            next_cursor: next_cursor.map(str::to_string),
            state: Mutex::new(FakeSpaceRepositoryState::default()),
        }
    }

    pub fn fail_with(&self, message: &str) {
        self.state.lock().expect("mutex poisoned").fail_with = Some(message.to_string());
    }

    pub fn list_calls(&self) -> Vec<(Option<u32>, Option<String>)> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .list_calls
            .clone()
    }

    fn check_failure(&self) -> Result<(), SpacesDomainError> {
        match &self.state.lock().expect("mutex poisoned").fail_with {
            Some(message) => Err(SpacesDomainError::InfrastructureError(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SpaceRepository for FakeSpaceRepository {
    async fn list(
        &self,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<PagedResult<Space>, SpacesDomainError> {
        self.check_failure()?;
        self.state
            .lock()
            .expect("mutex poisoned")
            .list_calls
            .push((limit, cursor.map(str::to_string)));

        Ok(PagedResult::new(
            self.spaces.clone(),
            self.next_cursor.clone(),
        ))
    }

    async fn find_by_key(&self, space_key: &SpaceKey) -> Result<Option<Space>, SpacesDomainError> {
        self.check_failure()?;
        Ok(self
            .spaces
            .iter()
            .find(|space| space.key() == space_key)
            .cloned())
    }

    async fn find_by_id(&self, space_id: &SpaceId) -> Result<Option<Space>, SpacesDomainError> {
        self.check_failure()?;
        Ok(self
            .spaces
            .iter()
            .find(|space| space.id() == space_id)
            .cloned())
    }
}
