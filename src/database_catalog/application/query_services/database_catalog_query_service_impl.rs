use std::sync::Arc;

use async_trait::async_trait;

use crate::database_catalog::{
    domain::{
        model::{
            enums::database_catalog_domain_error::DatabaseCatalogDomainError,
            queries::{
                list_databases_query::ListDatabasesQuery, list_tables_query::ListTablesQuery,
            },
        },
        services::database_catalog_query_service::DatabaseCatalogQueryService,
    },
    infrastructure::persistence::repositories::database_catalog_repository::DatabaseCatalogRepository,
};

pub struct DatabaseCatalogQueryServiceImpl {
    repository: Arc<dyn DatabaseCatalogRepository>,
}

impl DatabaseCatalogQueryServiceImpl {
    pub fn new(repository: Arc<dyn DatabaseCatalogRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl DatabaseCatalogQueryService for DatabaseCatalogQueryServiceImpl {
    async fn handle_list_databases(
        &self,
        _query: ListDatabasesQuery,
    ) -> Result<Vec<String>, DatabaseCatalogDomainError> {
        self.repository.list_databases().await
    }

    async fn handle_list_tables(
        &self,
        query: ListTablesQuery,
    ) -> Result<Vec<String>, DatabaseCatalogDomainError> {
        self.repository
            .list_tables(query.database_name(), query.schema_name())
            .await
    }
}
