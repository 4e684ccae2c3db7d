pub mod table_inspector_error_response_resource;
pub mod table_metadata_resource;
pub mod table_rows_query_resource;
pub mod table_view_resource;
