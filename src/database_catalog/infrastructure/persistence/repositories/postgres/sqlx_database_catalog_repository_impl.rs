use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgConnectOptions};

use crate::{
    config::app_config::AppConfig,
    database_catalog::{
        domain::model::{
            enums::database_catalog_domain_error::DatabaseCatalogDomainError,
            value_objects::{database_name::DatabaseName, schema_name::SchemaName},
        },
        infrastructure::persistence::repositories::database_catalog_repository::DatabaseCatalogRepository,
    },
};

pub struct SqlxDatabaseCatalogRepositoryImpl {
    admin_pool: PgPool,
    config: AppConfig,
}

impl SqlxDatabaseCatalogRepositoryImpl {
    pub fn new(admin_pool: PgPool, config: AppConfig) -> Self {
        Self { admin_pool, config }
    }

    async fn connect_to_database(
        &self,
        database_name: &DatabaseName,
    ) -> Result<PgPool, DatabaseCatalogDomainError> {
        let options = PgConnectOptions::new()
            .host(&self.config.postgres_host)
            .port(self.config.postgres_port)
            .username(&self.config.postgres_user)
            .password(&self.config.postgres_password)
            .database(database_name.value());

        PgPool::connect_with(options)
            .await
            .map_err(|e| DatabaseCatalogDomainError::ConnectionError(e.to_string()))
    }
}

#[async_trait]
impl DatabaseCatalogRepository for SqlxDatabaseCatalogRepositoryImpl {
    async fn list_databases(&self) -> Result<Vec<String>, DatabaseCatalogDomainError> {
        let statement = r#"
            SELECT datname
            FROM pg_database
            WHERE datistemplate = false
            ORDER BY datname
        "#;

        let rows = sqlx::query(statement)
            .fetch_all(&self.admin_pool)
            .await
            .map_err(|e| DatabaseCatalogDomainError::QueryError(e.to_string()))?;

        let mut names = Vec::with_capacity(rows.len());
        for row in rows {
            names.push(
                row.try_get::<String, _>("datname")
                    .map_err(|e| DatabaseCatalogDomainError::QueryError(e.to_string()))?,
            );
        }

        Ok(names)
    }

    async fn list_tables(
        &self,
        database_name: &DatabaseName,
        schema_name: &SchemaName,
    ) -> Result<Vec<String>, DatabaseCatalogDomainError> {
        let exists_statement = r#"
            SELECT 1
            FROM pg_database
            WHERE datname = $1
                AND datistemplate = false
        "#;

        sqlx::query(exists_statement)
            .bind(database_name.value())
            .fetch_optional(&self.admin_pool)
            .await
            .map_err(|e| DatabaseCatalogDomainError::ConnectionError(e.to_string()))?
            .ok_or(DatabaseCatalogDomainError::DatabaseNotFound)?;

        let database_pool = self.connect_to_database(database_name).await?;

        let statement = r#"
            SELECT table_name
            FROM information_schema.tables
            WHERE table_schema = $1
            ORDER BY table_name
        "#;

        let rows = sqlx::query(statement)
            .bind(schema_name.value())
            .fetch_all(&database_pool)
            .await
            .map_err(|e| DatabaseCatalogDomainError::QueryError(e.to_string()))?;

        let mut names = Vec::with_capacity(rows.len());
        for row in rows {
            names.push(
                row.try_get::<String, _>("table_name")
                    .map_err(|e| DatabaseCatalogDomainError::QueryError(e.to_string()))?,
            );
        }

        Ok(names)
    }
}
