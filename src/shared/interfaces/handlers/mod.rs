pub mod handler_arguments;
pub mod handler_error;
pub mod operation_handler;
pub mod paged_resource;
