pub mod cql_query;
