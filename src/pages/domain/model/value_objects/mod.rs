pub mod page_id;
pub mod page_title;
