pub mod list_databases_query;
pub mod list_tables_query;
