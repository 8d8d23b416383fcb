pub mod space_query_service_impl;
