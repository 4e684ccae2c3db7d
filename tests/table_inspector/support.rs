
pub use fixtures::{sample_rows, table_metadata_query, table_rows_query};
pub use harness::create_query_harness;
