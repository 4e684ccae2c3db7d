use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

use crate::table_inspector::{
    domain::model::{
        entities::catalog_records::{
            ColumnRecord, ForeignKeyColumnRecord, PrimaryKeyColumnRecord,
        },
        enums::table_inspector_domain_error::TableInspectorDomainError,
        value_objects::{
            database_name::DatabaseName, schema_name::SchemaName, table_name::TableName,
        },
    },
    infrastructure::persistence::repositories::{
        database_connection_resolver_repository::DatabaseConnectionResolverRepository,
        database_pool_cache_repository::DatabasePoolCacheRepository,
        table_catalog_repository::{RowSampleCriteria, TableCatalogRepository},
    },
};

pub struct SqlxTableCatalogRepositoryImpl {
    connection_resolver: Arc<dyn DatabaseConnectionResolverRepository>,
    pool_cache: Arc<dyn DatabasePoolCacheRepository>,
}

impl SqlxTableCatalogRepositoryImpl {
    pub fn new(
        connection_resolver: Arc<dyn DatabaseConnectionResolverRepository>,
        pool_cache: Arc<dyn DatabasePoolCacheRepository>,
    ) -> Self {
        Self {
            connection_resolver,
            pool_cache,
        }
    }

    async fn resolve_pool(
        &self,
        database_name: &DatabaseName,
    ) -> Result<PgPool, TableInspectorDomainError> {
        let database_url = self
            .connection_resolver
            .resolve_database_url(database_name)
            .await?;

        self.pool_cache.get_or_create_pool(&database_url).await
    }

    fn quote_identifier(identifier: &str) -> Result<String, TableInspectorDomainError> {
        if identifier.is_empty()
            || !identifier
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(TableInspectorDomainError::InvalidQueryParameters);
        }

        Ok(format!("\"{}\"", identifier))
    }

    fn qualified_table(
        schema_name: &str,
        table_name: &str,
    ) -> Result<String, TableInspectorDomainError> {
        Ok(format!(
            "{}.{}",
            Self::quote_identifier(schema_name)?,
            Self::quote_identifier(table_name)?
        ))
    }
}

fn map_sqlx_error(error: sqlx::Error) -> TableInspectorDomainError {
    match &error {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Configuration(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => TableInspectorDomainError::ConnectionError(error.to_string()),
        _ => TableInspectorDomainError::QueryError(error.to_string()),
    }
}

#[async_trait]
impl TableCatalogRepository for SqlxTableCatalogRepositoryImpl {
    async fn list_columns(
        &self,
        database_name: &DatabaseName,
        schema_name: &SchemaName,
        table_name: &TableName,
    ) -> Result<Vec<ColumnRecord>, TableInspectorDomainError> {
        let pool = self.resolve_pool(database_name).await?;

        let statement = r#"
            SELECT
                c.column_name,
                c.data_type,
                c.is_nullable,
                c.column_default,
                c.ordinal_position::int AS ordinal_position
            FROM information_schema.columns c
            WHERE c.table_schema = $1
                AND c.table_name = $2
            ORDER BY c.ordinal_position
        "#;

        let rows = sqlx::query(statement)
            .bind(schema_name.value())
            .bind(table_name.value())
            .fetch_all(&pool)
            .await
            .map_err(map_sqlx_error)?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(ColumnRecord {
                column_name: row
                    .try_get::<String, _>("column_name")
                    .map_err(map_sqlx_error)?,
                data_type: row
                    .try_get::<String, _>("data_type")
                    .unwrap_or_else(|_| "text".to_string()),
                is_nullable: row
                    .try_get::<String, _>("is_nullable")
                    .unwrap_or_else(|_| "YES".to_string())
                    == "YES",
                default_value: row
                    .try_get::<Option<String>, _>("column_default")
                    .unwrap_or(None),
                ordinal_position: row
                    .try_get::<i32, _>("ordinal_position")
                    .map_err(map_sqlx_error)?,
            });
        }

        Ok(records)
    }

    async fn list_primary_key_columns(
        &self,
        database_name: &DatabaseName,
        schema_name: &SchemaName,
        table_name: &TableName,
    ) -> Result<Vec<PrimaryKeyColumnRecord>, TableInspectorDomainError> {
        let pool = self.resolve_pool(database_name).await?;

        let statement = r#"
            SELECT kcu.column_name
            FROM information_schema.table_constraints tc
            INNER JOIN information_schema.key_column_usage kcu
                ON tc.constraint_name = kcu.constraint_name
                AND tc.table_schema = kcu.table_schema
            WHERE tc.constraint_type = 'PRIMARY KEY'
                AND tc.table_schema = $1
                AND tc.table_name = $2
        "#;

        let rows = sqlx::query(statement)
            .bind(schema_name.value())
            .bind(table_name.value())
            .fetch_all(&pool)
            .await
            .map_err(map_sqlx_error)?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(PrimaryKeyColumnRecord {
                column_name: row
                    .try_get::<String, _>("column_name")
                    .map_err(map_sqlx_error)?,
            });
        }

        Ok(records)
    }

    async fn list_foreign_key_columns(
        &self,
        database_name: &DatabaseName,
        schema_name: &SchemaName,
        table_name: &TableName,
    ) -> Result<Vec<ForeignKeyColumnRecord>, TableInspectorDomainError> {
        let pool = self.resolve_pool(database_name).await?;

        let statement = r#"
            SELECT
                kcu.column_name,
                ccu.table_name AS referenced_table_name,
                ccu.column_name AS referenced_column_name
            FROM information_schema.table_constraints tc
            INNER JOIN information_schema.key_column_usage kcu
                ON tc.constraint_name = kcu.constraint_name
                AND tc.table_schema = kcu.table_schema
            INNER JOIN information_schema.constraint_column_usage ccu
                ON ccu.constraint_name = tc.constraint_name
            WHERE tc.constraint_type = 'FOREIGN KEY'
                AND tc.table_schema = $1
                AND tc.table_name = $2
        "#;

        let rows = sqlx::query(statement)
            .bind(schema_name.value())
            .bind(table_name.value())
            .fetch_all(&pool)
            .await
            .map_err(map_sqlx_error)?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(ForeignKeyColumnRecord {
                column_name: row
                    .try_get::<String, _>("column_name")
                    .map_err(map_sqlx_error)?,
                referenced_table: row
                    .try_get::<String, _>("referenced_table_name")
                    .map_err(map_sqlx_error)?,
                referenced_column: row
                    .try_get::<String, _>("referenced_column_name")
                    .map_err(map_sqlx_error)?,
            });
        }

        Ok(records)
    }

    async fn fetch_row_sample(
        &self,
        database_name: &DatabaseName,
        criteria: RowSampleCriteria,
    ) -> Result<Value, TableInspectorDomainError> {
        let pool = self.resolve_pool(database_name).await?;
        let qualified_table = Self::qualified_table(&criteria.schema_name, &criteria.table_name)?;

        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT COALESCE(jsonb_agg(payload), '[]'::jsonb) AS payload FROM (SELECT to_jsonb(t) AS payload FROM {} AS t",
            qualified_table
        ));

        if let Some(order_by) = criteria.order_by {
            let quoted = Self::quote_identifier(&order_by)?;
            builder.push(format!(" ORDER BY t.{quoted} "));
            builder.push(if criteria.order_desc { "DESC" } else { "ASC" });
        }

        builder.push(" LIMIT ");
        builder.push_bind(criteria.limit);
        builder.push(" OFFSET ");
        builder.push_bind(criteria.offset);
        builder.push(") AS subq");

        let row = builder
            .build()
            .fetch_one(&pool)
            .await
            .map_err(map_sqlx_error)?;

        row.try_get("payload").map_err(map_sqlx_error)
    }
}
