use async_trait::async_trait;

use crate::database_catalog::domain::model::{
    enums::database_catalog_domain_error::DatabaseCatalogDomainError,
    value_objects::{database_name::DatabaseName, schema_name::SchemaName},
};

#[async_trait]
pub trait DatabaseCatalogRepository: Send + Sync {
    async fn list_databases(&self) -> Result<Vec<String>, DatabaseCatalogDomainError>;

    async fn list_tables(
        &self,
        database_name: &DatabaseName,
        schema_name: &SchemaName,
    ) -> Result<Vec<String>, DatabaseCatalogDomainError>;
}
