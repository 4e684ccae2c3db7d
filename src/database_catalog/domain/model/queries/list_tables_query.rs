use crate::database_catalog::domain::model::{
    enums::database_catalog_domain_error::DatabaseCatalogDomainError,
    value_objects::{database_name::DatabaseName, schema_name::SchemaName},
};

#[derive(Clone, Debug)]
pub struct ListTablesQuery {
    database_name: DatabaseName,
    schema_name: SchemaName,
}

impl ListTablesQuery {
    pub fn new(
        database_name: String,
        schema_name: String,
    ) -> Result<Self, DatabaseCatalogDomainError> {
        Ok(Self {
            database_name: DatabaseName::new(database_name)?,
            schema_name: SchemaName::new(schema_name)?,
        })
    }

    pub fn database_name(&self) -> &DatabaseName {
        &self.database_name
    }
    pub fn schema_name(&self) -> &SchemaName {
        &self.schema_name
    }
}
