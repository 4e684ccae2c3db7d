use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::table_inspector::{
    domain::{
        model::{
            entities::table_metadata::TableMetadata,
            enums::table_inspector_domain_error::TableInspectorDomainError,
            queries::{
                table_metadata_query::TableMetadataQuery, table_rows_query::TableRowsQuery,
            },
            value_objects::{
                database_name::DatabaseName, schema_name::SchemaName, table_name::TableName,
            },
        },
        services::table_inspector_query_service::TableInspectorQueryService,
    },
    infrastructure::persistence::repositories::table_catalog_repository::{
        RowSampleCriteria, TableCatalogRepository,
    },
};

pub struct TableInspectorQueryServiceImpl {
    repository: Arc<dyn TableCatalogRepository>,
}

impl TableInspectorQueryServiceImpl {
    pub fn new(repository: Arc<dyn TableCatalogRepository>) -> Self {
        Self { repository }
    }

    /// The three catalog lookups are independent, so they run concurrently;
    /// `try_join!` is the barrier before the merge. Any failure aborts the
    /// whole call and nothing partial is composed.
    async fn introspect(
        &self,
        database_name: &DatabaseName,
        schema_name: &SchemaName,
        table_name: &TableName,
    ) -> Result<TableMetadata, TableInspectorDomainError> {
        let (columns, primary_key_columns, foreign_key_columns) = tokio::try_join!(
            self.repository
                .list_columns(database_name, schema_name, table_name),
            self.repository
                .list_primary_key_columns(database_name, schema_name, table_name),
            self.repository
                .list_foreign_key_columns(database_name, schema_name, table_name),
        )?;

        TableMetadata::compose(
            schema_name,
            table_name,
            columns,
            primary_key_columns,
            foreign_key_columns,
        )
    }
}

#[async_trait]
impl TableInspectorQueryService for TableInspectorQueryServiceImpl {
    async fn handle_table_metadata(
        &self,
        query: TableMetadataQuery,
    ) -> Result<TableMetadata, TableInspectorDomainError> {
        self.introspect(
            query.database_name(),
            query.schema_name(),
            query.table_name(),
        )
        .await
    }

    async fn handle_table_view(
        &self,
        query: TableRowsQuery,
    ) -> Result<(TableMetadata, Value), TableInspectorDomainError> {
        let metadata = self
            .introspect(
                query.database_name(),
                query.schema_name(),
                query.table_name(),
            )
            .await?;

        // Sorting by a column the table does not have is a caller mistake,
        // not something to forward to the database.
        let order_by = match query.order_by() {
            Some(column) if !metadata.has_column(column) => {
                return Err(TableInspectorDomainError::InvalidQueryParameters);
            }
            other => other.map(str::to_string),
        };

        let rows = self
            .repository
            .fetch_row_sample(
                query.database_name(),
                RowSampleCriteria {
                    schema_name: metadata.schema_name.clone(),
                    table_name: metadata.table_name.clone(),
                    limit: query.limit(),
                    offset: query.offset(),
                    order_by,
                    order_desc: query.order_desc(),
                },
            )
            .await?;

        Ok((metadata, rows))
    }
}
