pub mod http_content_search_repository_impl;
