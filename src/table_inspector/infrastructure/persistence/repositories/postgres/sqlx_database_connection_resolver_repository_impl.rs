use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    config::app_config::AppConfig,
    table_inspector::{
        domain::model::{
            enums::table_inspector_domain_error::TableInspectorDomainError,
            value_objects::database_name::DatabaseName,
        },
        infrastructure::persistence::repositories::database_connection_resolver_repository::DatabaseConnectionResolverRepository,
    },
};

pub struct SqlxDatabaseConnectionResolverRepositoryImpl {
    admin_pool: PgPool,
    config: AppConfig,
}

impl SqlxDatabaseConnectionResolverRepositoryImpl {
    pub fn new(admin_pool: PgPool, config: AppConfig) -> Self {
        Self { admin_pool, config }
    }
}

#[async_trait]
impl DatabaseConnectionResolverRepository for SqlxDatabaseConnectionResolverRepositoryImpl {
    async fn resolve_database_url(
        &self,
        database_name: &DatabaseName,
    ) -> Result<String, TableInspectorDomainError> {
        let statement = r#"
            SELECT 1
            FROM pg_database
            WHERE datname = $1
                AND datistemplate = false
        "#;

        sqlx::query(statement)
            .bind(database_name.value())
            .fetch_optional(&self.admin_pool)
            .await
            .map_err(|e| TableInspectorDomainError::ConnectionError(e.to_string()))?
            .ok_or(TableInspectorDomainError::DatabaseNotFound)?;

        Ok(self.config.database_url(database_name.value()))
    }
}
