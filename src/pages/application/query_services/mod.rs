pub mod page_query_service_impl;
