pub mod spaces_handler;
