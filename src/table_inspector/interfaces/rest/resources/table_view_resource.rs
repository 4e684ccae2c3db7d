use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::table_inspector::domain::model::entities::table_metadata::TableMetadata;

/// Display model for the grid: column names in declared order plus the row
/// sample exactly as fetched. No schema logic happens here.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TableViewResource {
    pub table_name: String,
    pub columns: Vec<String>,
    pub rows: Value,
}

impl TableViewResource {
    pub fn from_parts(metadata: TableMetadata, rows: Value) -> Self {
        Self {
            columns: metadata.column_names(),
            table_name: metadata.table_name,
            rows,
        }
    }
}
