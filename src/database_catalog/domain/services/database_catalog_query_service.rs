use async_trait::async_trait;

use crate::database_catalog::domain::model::{
    enums::database_catalog_domain_error::DatabaseCatalogDomainError,
    queries::{list_databases_query::ListDatabasesQuery, list_tables_query::ListTablesQuery},
};

#[async_trait]
pub trait DatabaseCatalogQueryService: Send + Sync {
    async fn handle_list_databases(
        &self,
        query: ListDatabasesQuery,
    ) -> Result<Vec<String>, DatabaseCatalogDomainError>;

    async fn handle_list_tables(
        &self,
        query: ListTablesQuery,
    ) -> Result<Vec<String>, DatabaseCatalogDomainError>;
}
