pub mod error_response_resource;
pub mod handler_invocation_resource;
pub mod operation_catalog_resource;
