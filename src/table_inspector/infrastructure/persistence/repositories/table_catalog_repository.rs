use async_trait::async_trait;
use serde_json::Value;

use crate::table_inspector::domain::model::{
    entities::catalog_records::{ColumnRecord, ForeignKeyColumnRecord, PrimaryKeyColumnRecord},
    enums::table_inspector_domain_error::TableInspectorDomainError,
    value_objects::{
        database_name::DatabaseName, schema_name::SchemaName, table_name::TableName,
    },
};

#[derive(Clone, Debug)]
pub struct RowSampleCriteria {
    pub schema_name: String,
    pub table_name: String,
    pub limit: i64,
    pub offset: i64,
    pub order_by: Option<String>,
    pub order_desc: bool,
}

/// Catalog access for a single table. The three listing methods are
/// independent and may run concurrently; each returns an unordered set.
#[async_trait]
pub trait TableCatalogRepository: Send + Sync {
    async fn list_columns(
        &self,
        database_name: &DatabaseName,
        schema_name: &SchemaName,
        table_name: &TableName,
    ) -> Result<Vec<ColumnRecord>, TableInspectorDomainError>;

    async fn list_primary_key_columns(
        &self,
        database_name: &DatabaseName,
        schema_name: &SchemaName,
        table_name: &TableName,
    ) -> Result<Vec<PrimaryKeyColumnRecord>, TableInspectorDomainError>;

    async fn list_foreign_key_columns(
        &self,
        database_name: &DatabaseName,
        schema_name: &SchemaName,
        table_name: &TableName,
    ) -> Result<Vec<ForeignKeyColumnRecord>, TableInspectorDomainError>;

    async fn fetch_row_sample(
        &self,
        database_name: &DatabaseName,
        criteria: RowSampleCriteria,
    ) -> Result<Value, TableInspectorDomainError>;
}
