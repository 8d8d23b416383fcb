pub mod domain_handlers;
pub mod domain_handlers_factory;
pub mod interfaces;
