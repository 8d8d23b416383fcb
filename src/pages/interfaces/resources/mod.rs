pub mod page_resource;
