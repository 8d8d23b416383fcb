pub mod confluence;
pub mod content_search_repository;
