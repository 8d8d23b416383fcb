
mod http_repository_tests;
mod query_service_tests;
