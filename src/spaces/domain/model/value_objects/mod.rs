pub mod space_id;
pub mod space_key;
