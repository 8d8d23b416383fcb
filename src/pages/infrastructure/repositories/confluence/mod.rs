pub mod http_page_repository_impl;
