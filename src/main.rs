use std::{process::ExitCode, sync::Arc};

use axum::Router;
use confluence_domain_handlers::{
    config::app_config::AppConfig,
    gateway::{
        domain_handlers_factory::create_domain_handlers,
        interfaces::rest::{
            controllers::domain_handlers_rest_controller::{
                DomainHandlersRestControllerState, router,
            },
            resources::{
                error_response_resource::ErrorResponseResource,
                handler_invocation_resource::{
                    HandlerInvocationRequestResource, HandlerInvocationResponseResource,
                },
                operation_catalog_resource::{DomainOperationsResource, OperationCatalogResource},
            },
        },
    },
};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        confluence_domain_handlers::gateway::interfaces::rest::controllers::domain_handlers_rest_controller::list_operations,
        confluence_domain_handlers::gateway::interfaces::rest::controllers::domain_handlers_rest_controller::invoke_operation
    ),
    components(
        schemas(
            ErrorResponseResource,
            HandlerInvocationRequestResource,
            HandlerInvocationResponseResource,
            DomainOperationsResource,
            OperationCatalogResource
        )
    ),
    tags(
        (name = "confluence", description = "Confluence spaces, pages and search handlers")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let handlers = match create_domain_handlers() {
        Ok(handlers) => handlers,
        Err(_) => return ExitCode::FAILURE,
    };
    info!(
        operations = handlers.operation_count(),
        "domain handlers ready"
    );

    let app = Router::new()
        .merge(router(DomainHandlersRestControllerState {
            handlers: Arc::new(handlers),
        }))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, %addr, "failed to bind server address");
            return ExitCode::FAILURE;
        }
    };

    info!("server listening on http://localhost:{}", config.port);
    info!(
        "swagger ui available at http://localhost:{}/swagger-ui",
        config.port
    );

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server stopped");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
