pub mod database_catalog_error_response_resource;
pub mod database_summary_resource;
pub mod list_tables_query_resource;
pub mod table_summary_resource;
