pub mod handlers;
pub mod resources;
