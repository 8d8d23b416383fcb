pub mod search_content_query;
