pub mod get_child_pages_query;
pub mod get_page_query;
pub mod get_pages_by_space_query;
pub mod search_pages_query;
