pub mod spaces_domain_error;
