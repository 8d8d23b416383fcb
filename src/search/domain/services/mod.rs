pub mod content_search_query_service;
