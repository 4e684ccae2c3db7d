use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::table_inspector::domain::model::{
    entities::catalog_records::{ColumnRecord, ForeignKeyColumnRecord, PrimaryKeyColumnRecord},
    enums::table_inspector_domain_error::TableInspectorDomainError,
    value_objects::{schema_name::SchemaName, table_name::TableName},
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    pub column_name: String,
    pub data_type: String,
    pub is_nullable: bool,
    pub default_value: Option<String>,
    pub is_primary_key: bool,
    pub is_foreign_key: bool,
    pub referenced_table: Option<String>,
    pub referenced_column: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMetadata {
    pub schema_name: String,
    pub table_name: String,
    pub columns: Vec<ColumnMetadata>,
}

impl TableMetadata {
    /// Merges the three catalog result sets into one ordered column list.
    ///
    /// Columns come out in ordinal order regardless of the order the catalog
    /// returned them. A column whose name appears in the primary-key set is
    /// flagged as primary key; a column with a foreign-key entry carries its
    /// referenced table and column. A column referenced by more than one
    /// foreign-key constraint keeps the first target returned by the catalog.
    ///
    /// An empty column set means the table does not exist for the current
    /// role, so this returns `TableNotFound` instead of an empty value.
    pub fn compose(
        schema_name: &SchemaName,
        table_name: &TableName,
        mut columns: Vec<ColumnRecord>,
        primary_key_columns: Vec<PrimaryKeyColumnRecord>,
        foreign_key_columns: Vec<ForeignKeyColumnRecord>,
    ) -> Result<Self, TableInspectorDomainError> {
        if columns.is_empty() {
            return Err(TableInspectorDomainError::TableNotFound);
        }

        columns.sort_by_key(|record| record.ordinal_position);

        let primary_key_names: HashSet<&str> = primary_key_columns
            .iter()
            .map(|record| record.column_name.as_str())
            .collect();

        let mut foreign_key_targets: HashMap<&str, (&str, &str)> = HashMap::new();
        for record in &foreign_key_columns {
            if foreign_key_targets.contains_key(record.column_name.as_str()) {
                tracing::warn!(
                    column = %record.column_name,
                    referenced_table = %record.referenced_table,
                    "columna con más de una foreign key, se conserva el primer destino"
                );
                continue;
            }

            foreign_key_targets.insert(
                record.column_name.as_str(),
                (
                    record.referenced_table.as_str(),
                    record.referenced_column.as_str(),
                ),
            );
        }

        let columns = columns
            .into_iter()
            .map(|record| {
                let target = foreign_key_targets.get(record.column_name.as_str()).copied();

                ColumnMetadata {
                    is_primary_key: primary_key_names.contains(record.column_name.as_str()),
                    is_foreign_key: target.is_some(),
                    referenced_table: target.map(|(table, _)| table.to_string()),
                    referenced_column: target.map(|(_, column)| column.to_string()),
                    column_name: record.column_name,
                    data_type: record.data_type,
                    is_nullable: record.is_nullable,
                    default_value: record.default_value,
                }
            })
            .collect();

        Ok(Self {
            schema_name: schema_name.value().to_string(),
            table_name: table_name.value().to_string(),
            columns,
        })
    }

    pub fn has_column(&self, column_name: &str) -> bool {
        self.columns.iter().any(|c| c.column_name == column_name)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.column_name.clone()).collect()
    }
}
