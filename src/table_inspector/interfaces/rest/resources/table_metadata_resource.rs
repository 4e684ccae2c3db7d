use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::table_inspector::domain::model::entities::table_metadata::{
    ColumnMetadata, TableMetadata,
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ColumnMetadataResource {
    pub column_name: String,
    pub data_type: String,
    pub is_nullable: bool,
    pub default_value: Option<String>,
    pub is_primary_key: bool,
    pub is_foreign_key: bool,
    pub referenced_table: Option<String>,
    pub referenced_column: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TableMetadataResource {
    pub schema_name: String,
    pub table_name: String,
    pub columns: Vec<ColumnMetadataResource>,
}

impl From<ColumnMetadata> for ColumnMetadataResource {
    fn from(column: ColumnMetadata) -> Self {
        Self {
            column_name: column.column_name,
            data_type: column.data_type,
            is_nullable: column.is_nullable,
            default_value: column.default_value,
            is_primary_key: column.is_primary_key,
            is_foreign_key: column.is_foreign_key,
            referenced_table: column.referenced_table,
            referenced_column: column.referenced_column,
        }
    }
}

impl From<TableMetadata> for TableMetadataResource {
    fn from(metadata: TableMetadata) -> Self {
        Self {
            schema_name: metadata.schema_name,
            table_name: metadata.table_name,
            columns: metadata.columns.into_iter().map(Into::into).collect(),
        }
    }
}
