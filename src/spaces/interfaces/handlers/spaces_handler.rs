use std::{collections::BTreeMap, sync::Arc};

use serde_json::Value;

use crate::{
    shared::interfaces::handlers::{
        handler_arguments::HandlerArguments,
        handler_error::HandlerError,
        operation_handler::{HandlerResult, OperationHandlers, operation_handler},
        paged_resource::PagedResource,
    },
    spaces::{
        domain::{
            model::{
                enums::spaces_domain_error::SpacesDomainError,
                queries::{
                    get_space_by_id_query::GetSpaceByIdQuery,
                    get_space_by_key_query::GetSpaceByKeyQuery, get_spaces_query::GetSpacesQuery,
                },
                value_objects::{space_id::SpaceId, space_key::SpaceKey},
            },
            services::space_query_service::SpaceQueryService,
        },
        interfaces::resources::space_resource::SpaceResource,
    },
};

pub const GET_SPACES: &str = "getSpaces";
pub const GET_SPACE_BY_KEY: &str = "getSpaceByKey";
pub const GET_SPACE_BY_ID: &str = "getSpaceById";

pub struct SpacesHandler {
    query_service: Arc<dyn SpaceQueryService>,
}

impl SpacesHandler {
    pub fn new(query_service: Arc<dyn SpaceQueryService>) -> Self {
        Self { query_service }
    }

    pub async fn get_spaces(&self, arguments: Value) -> HandlerResult {
        let arguments = HandlerArguments::parse(arguments)?;
        let query = GetSpacesQuery::new(arguments.limit()?, arguments.optional_text("cursor")?);

        let spaces = self.query_service.handle_get_spaces(query).await?;

        Ok(serde_json::to_value(PagedResource::from_paged(&spaces, |space| {
            SpaceResource::from(space)
        }))?)
    }

    pub async fn get_space_by_key(&self, arguments: Value) -> HandlerResult {
        let arguments = HandlerArguments::parse(arguments)?;
        let query = GetSpaceByKeyQuery::new(arguments.identifier("spaceKey", SpaceKey::LABEL)?)?;

        let space = self.query_service.handle_get_by_key(query).await?;

        Ok(serde_json::to_value(SpaceResource::from(&space))?)
    }

    pub async fn get_space_by_id(&self, arguments: Value) -> HandlerResult {
        let arguments = HandlerArguments::parse(arguments)?;
        let query = GetSpaceByIdQuery::new(arguments.identifier("spaceId", SpaceId::LABEL)?)?;

        let space = self.query_service.handle_get_by_id(query).await?;

        Ok(serde_json::to_value(SpaceResource::from(&space))?)
    }

    pub fn into_operations(self: Arc<Self>) -> OperationHandlers {
        let mut operations = BTreeMap::new();
        operations.insert(
            GET_SPACES,
            operation_handler(&self, |handler, arguments| async move {
                handler.get_spaces(arguments).await
            }),
        );
        operations.insert(
            GET_SPACE_BY_KEY,
            operation_handler(&self, |handler, arguments| async move {
                handler.get_space_by_key(arguments).await
            }),
        );
        operations.insert(
            GET_SPACE_BY_ID,
            operation_handler(&self, |handler, arguments| async move {
                handler.get_space_by_id(arguments).await
            }),
        );
        operations
    }
}

impl From<SpacesDomainError> for HandlerError {
    fn from(error: SpacesDomainError) -> Self {
        match error {
            SpacesDomainError::Validation(validation_error) => {
                HandlerError::Validation(validation_error)
            }
            SpacesDomainError::SpaceNotFound(_) => HandlerError::NotFound(error.to_string()),
            SpacesDomainError::InfrastructureError(message) => HandlerError::Upstream(message),
        }
    }
}
