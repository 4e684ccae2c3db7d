pub mod table_metadata_query;
pub mod table_rows_query;
