pub mod page_command_service;
pub mod page_query_service;
