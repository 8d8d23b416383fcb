use async_trait::async_trait;

use crate::pages::domain::model::{
    commands::{create_page_command::CreatePageCommand, update_page_command::UpdatePageCommand},
    entities::page::Page,
    enums::pages_domain_error::PagesDomainError,
};

#[async_trait]
pub trait PageCommandService: Send + Sync {
    async fn handle_create(&self, command: CreatePageCommand) -> Result<Page, PagesDomainError>;

    async fn handle_update(&self, command: UpdatePageCommand) -> Result<Page, PagesDomainError>;
}
