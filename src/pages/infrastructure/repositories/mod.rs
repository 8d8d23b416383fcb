pub mod confluence;
pub mod page_repository;
