use std::sync::Arc;

use crate::{
    pages::{
        application::{
            command_services::page_command_service_impl::PageCommandServiceImpl,
            query_services::page_query_service_impl::PageQueryServiceImpl,
        },
        infrastructure::repositories::confluence::http_page_repository_impl::HttpPageRepositoryImpl,
        interfaces::handlers::pages_handler::PagesHandler,
    },
    shared::infrastructure::http::confluence_http_client::ConfluenceHttpClient,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_pages_handler(http_client: Arc<ConfluenceHttpClient>) -> PagesHandler {
    let page_repository = Arc::new(HttpPageRepositoryImpl::new(http_client));

    let query_service = Arc::new(PageQueryServiceImpl::new(page_repository.clone()));
    let command_service = Arc::new(PageCommandServiceImpl::new(page_repository));

    PagesHandler::new(query_service, command_service)
}
