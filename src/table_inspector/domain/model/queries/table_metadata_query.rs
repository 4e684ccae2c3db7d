use crate::table_inspector::domain::model::{
    enums::table_inspector_domain_error::TableInspectorDomainError,
    value_objects::{
        database_name::DatabaseName, schema_name::SchemaName, table_name::TableName,
    },
};

#[derive(Clone, Debug)]
pub struct TableMetadataQuery {
    database_name: DatabaseName,
    schema_name: SchemaName,
    table_name: TableName,
}

impl TableMetadataQuery {
    pub fn new(
        database_name: String,
        schema_name: String,
        table_name: String,
    ) -> Result<Self, TableInspectorDomainError> {
        Ok(Self {
            database_name: DatabaseName::new(database_name)?,
            schema_name: SchemaName::new(schema_name)?,
            table_name: TableName::new(table_name)?,
        })
    }

    pub fn database_name(&self) -> &DatabaseName {
        &self.database_name
    }
    pub fn schema_name(&self) -> &SchemaName {
        &self.schema_name
    }
    pub fn table_name(&self) -> &TableName {
        &self.table_name
    }
}
