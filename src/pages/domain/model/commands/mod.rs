pub mod create_page_command;
pub mod update_page_command;
