pub mod space_resource;
