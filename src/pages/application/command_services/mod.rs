pub mod page_command_service_impl;
