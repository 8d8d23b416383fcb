use std::sync::Arc;

use tracing::error;

use crate::{
    config::app_config::{AppConfig, ConfigError},
    gateway::domain_handlers::DomainHandlers,
    pages::build_pages_handler,
    search::build_search_handler,
    shared::infrastructure::http::confluence_http_client::{
        ConfluenceHttpClient, ConfluenceHttpError,
    },
    spaces::build_spaces_handler,
};

#[derive(Debug, thiserror::Error)]
pub enum HandlerFactoryError {
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] ConfigError),

    #[error("failed to build confluence http client: {0}")]
    HttpClient(#[from] ConfluenceHttpError),
}

impl HandlerFactoryError {
    pub fn stage(&self) -> &'static str {
        match self {
            HandlerFactoryError::Configuration(_) => "configuration",
            HandlerFactoryError::HttpClient(_) => "http_client",
        }
    }
}

/// Builds every domain handler from the process environment.
pub fn create_domain_handlers() -> Result<DomainHandlers, HandlerFactoryError> {
    create_domain_handlers_with(AppConfig::from_env)
}

pub fn create_domain_handlers_with<L>(load_config: L) -> Result<DomainHandlers, HandlerFactoryError>
where
    L: FnOnce() -> Result<AppConfig, ConfigError>,
{
    let config = load_config()
        .map_err(HandlerFactoryError::from)
        .inspect_err(log_factory_error)?;

    build_domain_handlers(&config)
}

pub fn build_domain_handlers(config: &AppConfig) -> Result<DomainHandlers, HandlerFactoryError> {
    let http_client = ConfluenceHttpClient::new(config)
        .map(Arc::new)
        .map_err(HandlerFactoryError::from)
        .inspect_err(log_factory_error)?;

    let spaces = Arc::new(build_spaces_handler(http_client.clone()));
    let pages = Arc::new(build_pages_handler(http_client.clone()));
    let search = Arc::new(build_search_handler(http_client));

    Ok(DomainHandlers::new(
        spaces.into_operations(),
        pages.into_operations(),
        search.into_operations(),
    ))
}

fn log_factory_error(error: &HandlerFactoryError) {
    error!(stage = error.stage(), error = %error, "failed to create domain handlers");
}
