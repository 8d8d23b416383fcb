pub mod domain_handlers_rest_controller;
