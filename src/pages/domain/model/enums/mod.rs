pub mod pages_domain_error;
