pub mod cql;
pub mod enums;
pub mod paged_result;
