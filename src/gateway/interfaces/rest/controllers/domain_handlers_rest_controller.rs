use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    gateway::{
        domain_handlers::DomainHandlers,
        interfaces::rest::resources::{
            error_response_resource::ErrorResponseResource,
            handler_invocation_resource::{
                HandlerInvocationRequestResource, HandlerInvocationResponseResource,
            },
            operation_catalog_resource::{DomainOperationsResource, OperationCatalogResource},
        },
    },
    shared::interfaces::handlers::handler_error::HandlerError,
};

#[derive(Clone)]
pub struct DomainHandlersRestControllerState {
    pub handlers: Arc<DomainHandlers>,
}

pub fn router(state: DomainHandlersRestControllerState) -> Router {
    Router::new()
        .route("/confluence/operations", get(list_operations))
        .route("/confluence/:domain/:operation", post(invoke_operation))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/confluence/operations",
    tag = "confluence",
    responses(
        (status = 200, description = "Available domain operations", body = OperationCatalogResource)
    )
)]
pub async fn list_operations(
    State(state): State<DomainHandlersRestControllerState>,
) -> Json<OperationCatalogResource> {
    let domains = state
        .handlers
        .catalog()
        .into_iter()
        .map(|(domain, operations)| DomainOperationsResource {
            domain: domain.to_string(),
            operations: operations.into_iter().map(str::to_string).collect(),
        })
        .collect();

    Json(OperationCatalogResource {
        domains,
        operation_count: state.handlers.operation_count(),
    })
}

#[utoipa::path(
    post,
    path = "/confluence/{domain}/{operation}",
    tag = "confluence",
    params(
        ("domain" = String, Path, description = "spaces, pages or search"),
        ("operation" = String, Path, description = "Operation name, e.g. getPage")
    ),
    request_body = HandlerInvocationRequestResource,
    responses(
        (status = 200, description = "Operation result", body = HandlerInvocationResponseResource),
        (status = 400, description = "Invalid arguments", body = ErrorResponseResource),
        (status = 404, description = "Unknown operation or missing resource", body = ErrorResponseResource),
        (status = 502, description = "Confluence failure", body = ErrorResponseResource)
    )
)]
pub async fn invoke_operation(
    State(state): State<DomainHandlersRestControllerState>,
    Path((domain, operation)): Path<(String, String)>,
    Json(request): Json<HandlerInvocationRequestResource>,
) -> Result<Json<HandlerInvocationResponseResource>, (StatusCode, Json<ErrorResponseResource>)> {
    let data = state
        .handlers
        .invoke(&domain, &operation, request.arguments)
        .await
        .map_err(map_handler_error)?;

    Ok(Json(HandlerInvocationResponseResource { data }))
}

fn map_handler_error(error: HandlerError) -> (StatusCode, Json<ErrorResponseResource>) {
    let status = match error {
        HandlerError::Validation(_) | HandlerError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        HandlerError::NotFound(_) | HandlerError::UnknownOperation { .. } => StatusCode::NOT_FOUND,
        HandlerError::Upstream(_) => StatusCode::BAD_GATEWAY,
        HandlerError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
