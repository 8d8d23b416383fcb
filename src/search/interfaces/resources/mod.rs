pub mod content_search_result_resource;
