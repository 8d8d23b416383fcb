use std::sync::Arc;

use confluence_domain_handlers::spaces::{
    application::query_services::space_query_service_impl::SpaceQueryServiceImpl,
    domain::model::entities::space::Space,
    interfaces::handlers::spaces_handler::SpacesHandler,
};

use super::fakes::FakeSpaceRepository;

pub struct SpaceQueryTestHarness {
    pub repository: Arc<FakeSpaceRepository>,
    pub service: SpaceQueryServiceImpl,
}

pub struct SpacesHandlerTestHarness {
    pub repository: Arc<FakeSpaceRepository>,
    pub handler: Arc<SpacesHandler>,
}

pub fn create_query_harness(spaces: Vec<Space>, next_cursor: Option<&str>) -> SpaceQueryTestHarness {
    let repository = Arc::new(FakeSpaceRepository::with_spaces(spaces, next_cursor));
    let service = SpaceQueryServiceImpl::new(repository.clone());

    SpaceQueryTestHarness {
        repository,
        service,
    }
}

pub fn create_handler_harness(spaces: Vec<Space>) -> SpacesHandlerTestHarness {
    let repository = Arc::new(FakeSpaceRepository::with_spaces(spaces, None));
    let service = Arc::new(SpaceQueryServiceImpl::new(repository.clone()));

    SpacesHandlerTestHarness {
        repository,
        handler: Arc::new(SpacesHandler::new(service)),
    }
}
