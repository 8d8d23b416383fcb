pub mod get_space_by_id_query;
pub mod get_space_by_key_query;
pub mod get_spaces_query;
