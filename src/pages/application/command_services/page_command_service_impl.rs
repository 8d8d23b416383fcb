use std::sync::Arc;

use async_trait::async_trait;

use crate::pages::{
    domain::{
        model::{
            commands::{
                create_page_command::CreatePageCommand, update_page_command::UpdatePageCommand,
            },
            entities::page::Page,
            enums::pages_domain_error::PagesDomainError,
            value_objects::page_title::PageTitle,
        },
        services::page_command_service::PageCommandService,
    },
    infrastructure::repositories::page_repository::PageRepository,
};

pub struct PageCommandServiceImpl {
    page_repository: Arc<dyn PageRepository>,
}

impl PageCommandServiceImpl {
    pub fn new(page_repository: Arc<dyn PageRepository>) -> Self {
        Self { page_repository }
    }
}

#[async_trait]
impl PageCommandService for PageCommandServiceImpl {
    async fn handle_create(&self, command: CreatePageCommand) -> Result<Page, PagesDomainError> {
        self.page_repository
            .create(
                command.space_id(),
                command.title(),
                command.body(),
                command.parent_id(),
            )
            .await
    }

    async fn handle_update(&self, command: UpdatePageCommand) -> Result<Page, PagesDomainError> {
        let current = self
            .page_repository
            .find_by_id(command.page_id())
            .await?
            .ok_or_else(|| PagesDomainError::PageNotFound(command.page_id().value().to_string()))?;

        // Confluence rejects updates that do not carry exactly the next version.
        let current_version = current.version().ok_or_else(|| {
            PagesDomainError::InfrastructureError("page version is missing".to_string())
        })?;

        let title = match command.title() {
            Some(title) => title.clone(),
            None => PageTitle::new(current.title().to_string())?,
        };
        let body = command.body().or(current.body()).unwrap_or_default();

        self.page_repository
            .update(
                command.page_id(),
                &title,
                body,
                current_version + 1,
                command.version_message(),
            )
            .await
    }
}
