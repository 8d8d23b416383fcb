pub mod pages_handler;
