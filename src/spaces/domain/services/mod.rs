pub mod space_query_service;
