use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

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
    interfaces::rest::resources::{
        database_catalog_error_response_resource::DatabaseCatalogErrorResponseResource,
        database_summary_resource::DatabaseSummaryResource,
        list_tables_query_resource::ListTablesQueryResource,
        table_summary_resource::TableSummaryResource,
    },
};

const DEFAULT_SCHEMA: &str = "public";

#[derive(Clone)]
pub struct DatabaseCatalogRestControllerState {
    pub query_service: Arc<dyn DatabaseCatalogQueryService>,
}

pub fn router(state: DatabaseCatalogRestControllerState) -> Router {
    Router::new()
        .route("/api/v1/databases", get(list_databases))
        .route("/api/v1/databases/:database_name/tables", get(list_tables))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/v1/databases",
    tag = "database-catalog",
    responses(
        (status = 200, description = "Bases de datos disponibles", body = [DatabaseSummaryResource]),
        (status = 500, description = "Error interno", body = DatabaseCatalogErrorResponseResource)
    )
)]
pub async fn list_databases(
    State(state): State<DatabaseCatalogRestControllerState>,
) -> Result<Json<Vec<DatabaseSummaryResource>>, (StatusCode, Json<DatabaseCatalogErrorResponseResource>)>
{
    let databases = state
        .query_service
        .handle_list_databases(ListDatabasesQuery::new())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        databases
            .into_iter()
            .map(|database_name| DatabaseSummaryResource { database_name })
            .collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/databases/{database_name}/tables",
    tag = "database-catalog",
    params(
        ("database_name" = String, Path, description = "Nombre de base de datos"),
        ("schema" = Option<String>, Query, description = "Schema, por defecto public")
    ),
    responses(
        (status = 200, description = "Tablas del schema", body = [TableSummaryResource]),
        (status = 400, description = "Identificadores inválidos", body = DatabaseCatalogErrorResponseResource),
        (status = 404, description = "Base de datos no encontrada", body = DatabaseCatalogErrorResponseResource),
        (status = 500, description = "Error interno", body = DatabaseCatalogErrorResponseResource)
    )
)]
pub async fn list_tables(
    State(state): State<DatabaseCatalogRestControllerState>,
    Path(database_name): Path<String>,
    Query(resource): Query<ListTablesQueryResource>,
) -> Result<Json<Vec<TableSummaryResource>>, (StatusCode, Json<DatabaseCatalogErrorResponseResource>)>
{
    let query = ListTablesQuery::new(
        database_name,
        resource
            .schema
            .unwrap_or_else(|| DEFAULT_SCHEMA.to_string()),
    )
    .map_err(map_domain_error)?;

    let tables = state
        .query_service
        .handle_list_tables(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        tables
            .into_iter()
            .map(|table_name| TableSummaryResource { table_name })
            .collect(),
    ))
}

fn map_domain_error(
    error: DatabaseCatalogDomainError,
) -> (StatusCode, Json<DatabaseCatalogErrorResponseResource>) {
    let status = match error {
        DatabaseCatalogDomainError::InvalidDatabaseName
        | DatabaseCatalogDomainError::InvalidSchemaName => StatusCode::BAD_REQUEST,
        DatabaseCatalogDomainError::DatabaseNotFound => StatusCode::NOT_FOUND,
        DatabaseCatalogDomainError::ConnectionError(_)
        | DatabaseCatalogDomainError::QueryError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(DatabaseCatalogErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
