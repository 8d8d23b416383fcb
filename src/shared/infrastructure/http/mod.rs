pub mod confluence_http_client;
