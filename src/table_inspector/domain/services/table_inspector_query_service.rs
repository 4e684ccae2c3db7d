use async_trait::async_trait;
use serde_json::Value;

use crate::table_inspector::domain::model::{
    entities::table_metadata::TableMetadata,
    enums::table_inspector_domain_error::TableInspectorDomainError,
    queries::{table_metadata_query::TableMetadataQuery, table_rows_query::TableRowsQuery},
};

#[async_trait]
pub trait TableInspectorQueryService: Send + Sync {
    async fn handle_table_metadata(
        &self,
        query: TableMetadataQuery,
    ) -> Result<TableMetadata, TableInspectorDomainError>;

    async fn handle_table_view(
        &self,
        query: TableRowsQuery,
    ) -> Result<(TableMetadata, Value), TableInspectorDomainError>;
}
