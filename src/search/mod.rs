use std::sync::Arc;

use crate::{
    search::{
        application::query_services::content_search_query_service_impl::ContentSearchQueryServiceImpl,
        infrastructure::repositories::confluence::http_content_search_repository_impl::HttpContentSearchRepositoryImpl,
        interfaces::handlers::search_handler::SearchHandler,
    },
    shared::infrastructure::http::confluence_http_client::ConfluenceHttpClient,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_search_handler(http_client: Arc<ConfluenceHttpClient>) -> SearchHandler {
    let search_repository = Arc::new(HttpContentSearchRepositoryImpl::new(http_client));
    let query_service = Arc::new(ContentSearchQueryServiceImpl::new(search_repository));

    SearchHandler::new(query_service)
}
