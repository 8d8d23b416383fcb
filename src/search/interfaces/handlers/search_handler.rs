use std::{collections::BTreeMap, sync::Arc};

use serde_json::Value;

use crate::{
    search::{
        domain::{
            model::{
                enums::search_domain_error::SearchDomainError,
                queries::search_content_query::SearchContentQuery,
            },
            services::content_search_query_service::ContentSearchQueryService,
        },
        interfaces::resources::content_search_result_resource::ContentSearchResultResource,
    },
    shared::interfaces::handlers::{
        handler_arguments::HandlerArguments,
        handler_error::HandlerError,
        operation_handler::{HandlerResult, OperationHandlers, operation_handler},
        paged_resource::PagedResource,
    },
};

pub const SEARCH_CONTENT: &str = "searchContent";

pub struct SearchHandler {
    query_service: Arc<dyn ContentSearchQueryService>,
}

impl SearchHandler {
    pub fn new(query_service: Arc<dyn ContentSearchQueryService>) -> Self {
        Self { query_service }
    }

    pub async fn search_content(&self, arguments: Value) -> HandlerResult {
        let arguments = HandlerArguments::parse(arguments)?;
        let query = SearchContentQuery::new(
            arguments.optional_text("cql")?,
            arguments.optional_text("query")?,
            arguments.limit()?,
            arguments.start()?,
            arguments.optional_text("cursor")?,
        )?;

        let results = self.query_service.handle_search(query).await?;

        Ok(serde_json::to_value(PagedResource::from_paged(
            &results,
            |result| ContentSearchResultResource::from(result),
        ))?)
    }

    pub fn into_operations(self: Arc<Self>) -> OperationHandlers {
        let mut operations = BTreeMap::new();
        operations.insert(
            SEARCH_CONTENT,
            operation_handler(&self, |handler, arguments| async move {
                handler.search_content(arguments).await
            }),
        );
        operations
    }
}

impl From<SearchDomainError> for HandlerError {
    fn from(error: SearchDomainError) -> Self {
        match error {
            SearchDomainError::Validation(validation_error) => {
                HandlerError::Validation(validation_error)
            }
            SearchDomainError::MissingSearchCriteria => {
                HandlerError::InvalidArgument(error.to_string())
            }
            SearchDomainError::InfrastructureError(message) => HandlerError::Upstream(message),
        }
    }
}
