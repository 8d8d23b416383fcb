use std::sync::Arc;

use crate::{
    shared::infrastructure::http::confluence_http_client::ConfluenceHttpClient,
    spaces::{
        application::query_services::space_query_service_impl::SpaceQueryServiceImpl,
        infrastructure::repositories::confluence::http_space_repository_impl::HttpSpaceRepositoryImpl,
        interfaces::handlers::spaces_handler::SpacesHandler,
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_spaces_handler(http_client: Arc<ConfluenceHttpClient>) -> SpacesHandler {
    let space_repository = Arc::new(HttpSpaceRepositoryImpl::new(http_client));
    let query_service = Arc::new(SpaceQueryServiceImpl::new(space_repository));

    SpacesHandler::new(query_service)
}
