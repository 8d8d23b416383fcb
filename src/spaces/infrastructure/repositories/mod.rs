pub mod confluence;
pub mod space_repository;
