pub mod config;
pub mod gateway;
pub mod pages;
pub mod search;
pub mod shared;
pub mod spaces;
