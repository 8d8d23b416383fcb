use std::{collections::BTreeMap, sync::Arc};

use serde_json::Value;

use crate::{
    pages::{
        domain::{
            model::{
                commands::{
                    create_page_command::CreatePageCommand, update_page_command::UpdatePageCommand,
                },
                enums::pages_domain_error::PagesDomainError,
                queries::{
                    get_child_pages_query::GetChildPagesQuery, get_page_query::GetPageQuery,
                    get_pages_by_space_query::GetPagesBySpaceQuery,
                    search_pages_query::SearchPagesQuery,
                },
                value_objects::page_title::PageTitle,
            },
            services::{
                page_command_service::PageCommandService, page_query_service::PageQueryService,
            },
        },
        interfaces::resources::page_resource::PageResource,
    },
    shared::{
        domain::validation::identifier_validator::PAGE_ID_LABEL,
        interfaces::handlers::{
            handler_arguments::HandlerArguments,
            handler_error::HandlerError,
            operation_handler::{HandlerResult, OperationHandlers, operation_handler},
            paged_resource::PagedResource,
        },
    },
    spaces::domain::model::value_objects::{space_id::SpaceId, space_key::SpaceKey},
};

pub const GET_PAGE: &str = "getPage";
pub const CREATE_PAGE: &str = "createPage";
pub const UPDATE_PAGE: &str = "updatePage";
pub const SEARCH_PAGES: &str = "searchPages";
pub const GET_PAGES_BY_SPACE: &str = "getPagesBySpace";
pub const GET_CHILD_PAGES: &str = "getChildPages";

pub struct PagesHandler {
    query_service: Arc<dyn PageQueryService>,
    command_service: Arc<dyn PageCommandService>,
}

impl PagesHandler {
    pub fn new(
        query_service: Arc<dyn PageQueryService>,
        command_service: Arc<dyn PageCommandService>,
    ) -> Self {
        Self {
            query_service,
            command_service,
        }
    }

    pub async fn get_page(&self, arguments: Value) -> HandlerResult {
        let arguments = HandlerArguments::parse(arguments)?;
        let query = GetPageQuery::new(page_id_argument(&arguments)?)?;

        let page = self.query_service.handle_get(query).await?;

        Ok(serde_json::to_value(PageResource::from(&page))?)
    }

    pub async fn create_page(&self, arguments: Value) -> HandlerResult {
        let arguments = HandlerArguments::parse(arguments)?;
        let command = CreatePageCommand::new(
            arguments.identifier("spaceId", SpaceId::LABEL)?,
            arguments.identifier("title", PageTitle::LABEL)?,
            arguments.optional_text("content")?.unwrap_or_default(),
            arguments.optional_identifier("parentId", PAGE_ID_LABEL)?,
        )?;

        let page = self.command_service.handle_create(command).await?;

        Ok(serde_json::to_value(PageResource::from(&page))?)
    }

    pub async fn update_page(&self, arguments: Value) -> HandlerResult {
        let arguments = HandlerArguments::parse(arguments)?;
        let command = UpdatePageCommand::new(
            page_id_argument(&arguments)?,
            arguments.optional_identifier("title", PageTitle::LABEL)?,
            arguments.optional_text("content")?,
            arguments.optional_text("versionMessage")?,
        )?;

        let page = self.command_service.handle_update(command).await?;

        Ok(serde_json::to_value(PageResource::from(&page))?)
    }

    pub async fn search_pages(&self, arguments: Value) -> HandlerResult {
        let arguments = HandlerArguments::parse(arguments)?;
        let query = SearchPagesQuery::new(
            arguments.identifier("query", SearchPagesQuery::TEXT_LABEL)?,
            arguments.optional_identifier("spaceKey", SpaceKey::LABEL)?,
            arguments.limit()?,
        )?;

        let pages = self.query_service.handle_search(query).await?;

        Ok(serde_json::to_value(PagedResource {
            results: pages.iter().map(PageResource::from).collect(),
            next_cursor: None,
        })?)
    }

    pub async fn get_pages_by_space(&self, arguments: Value) -> HandlerResult {
        let arguments = HandlerArguments::parse(arguments)?;
        let query = GetPagesBySpaceQuery::new(
            arguments.identifier("spaceId", SpaceId::LABEL)?,
            arguments.limit()?,
            arguments.optional_text("cursor")?,
        )?;

        let pages = self.query_service.handle_list_by_space(query).await?;

        Ok(serde_json::to_value(PagedResource::from_paged(&pages, |page| {
            PageResource::from(page)
        }))?)
    }

    pub async fn get_child_pages(&self, arguments: Value) -> HandlerResult {
        let arguments = HandlerArguments::parse(arguments)?;
        let query = GetChildPagesQuery::new(
            page_id_argument(&arguments)?,
            arguments.limit()?,
            arguments.optional_text("cursor")?,
        )?;

        let pages = self.query_service.handle_list_children(query).await?;

        Ok(serde_json::to_value(PagedResource::from_paged(&pages, |page| {
            PageResource::from(page)
        }))?)
    }

    pub fn into_operations(self: Arc<Self>) -> OperationHandlers {
        let mut operations = BTreeMap::new();
        operations.insert(
            GET_PAGE,
            operation_handler(&self, |handler, arguments| async move {
                handler.get_page(arguments).await
            }),
        );
        operations.insert(
            CREATE_PAGE,
            operation_handler(&self, |handler, arguments| async move {
                handler.create_page(arguments).await
            }),
        );
        operations.insert(
            UPDATE_PAGE,
            operation_handler(&self, |handler, arguments| async move {
                handler.update_page(arguments).await
            }),
        );
        operations.insert(
            SEARCH_PAGES,
            operation_handler(&self, |handler, arguments| async move {
                handler.search_pages(arguments).await
            }),
        );
        operations.insert(
            GET_PAGES_BY_SPACE,
            operation_handler(&self, |handler, arguments| async move {
                handler.get_pages_by_space(arguments).await
            }),
        );
        operations.insert(
            GET_CHILD_PAGES,
            operation_handler(&self, |handler, arguments| async move {
                handler.get_child_pages(arguments).await
            }),
        );
        operations
    }
}

fn page_id_argument(arguments: &HandlerArguments) -> Result<String, HandlerError> {
    arguments.identifier("pageId", PAGE_ID_LABEL)
}

impl From<PagesDomainError> for HandlerError {
    fn from(error: PagesDomainError) -> Self {
        match error {
            PagesDomainError::Validation(validation_error) => {
                HandlerError::Validation(validation_error)
            }
            PagesDomainError::PageNotFound(_) => HandlerError::NotFound(error.to_string()),
            PagesDomainError::MissingPageChanges => HandlerError::InvalidArgument(error.to_string()),
            PagesDomainError::InfrastructureError(message) => HandlerError::Upstream(message),
        }
    }
}
