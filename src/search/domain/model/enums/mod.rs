pub mod search_domain_error;
