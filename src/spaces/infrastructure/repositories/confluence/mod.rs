pub mod http_space_repository_impl;
