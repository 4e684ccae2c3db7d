use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::table_inspector::{
    domain::{
        model::{
            enums::table_inspector_domain_error::TableInspectorDomainError,
            queries::{
                table_metadata_query::TableMetadataQuery,
                table_rows_query::{TableRowsQuery, TableRowsQueryParts},
            },
        },
        services::table_inspector_query_service::TableInspectorQueryService,
    },
    interfaces::rest::resources::{
        table_inspector_error_response_resource::TableInspectorErrorResponseResource,
        table_metadata_resource::TableMetadataResource,
        table_rows_query_resource::TableRowsQueryResource,
        table_view_resource::TableViewResource,
    },
};

const DEFAULT_SCHEMA: &str = "public";
const DEFAULT_ROW_SAMPLE_LIMIT: i64 = 100;

#[derive(Clone)]
pub struct TableInspectorRestControllerState {
    pub query_service: Arc<dyn TableInspectorQueryService>,
}

pub fn router(state: TableInspectorRestControllerState) -> Router {
    Router::new()
        .route(
            "/api/v1/databases/:database_name/tables/:table_name/_schema",
            get(introspect_table_schema),
        )
        .route(
            "/api/v1/databases/:database_name/tables/:table_name",
            get(view_table),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/v1/databases/{database_name}/tables/{table_name}/_schema",
    tag = "table-inspector",
    params(
        ("database_name" = String, Path, description = "Nombre de base de datos"),
        ("table_name" = String, Path, description = "Nombre de tabla"),
        ("schema" = Option<String>, Query, description = "Schema, por defecto public")
    ),
    responses(
        (status = 200, description = "Metadatos de la tabla", body = TableMetadataResource),
        (status = 400, description = "Identificadores inválidos", body = TableInspectorErrorResponseResource),
        (status = 404, description = "Base de datos o tabla no encontrada", body = TableInspectorErrorResponseResource),
        (status = 500, description = "Error interno", body = TableInspectorErrorResponseResource)
    )
)]
pub async fn introspect_table_schema(
    State(state): State<TableInspectorRestControllerState>,
    Path((database_name, table_name)): Path<(String, String)>,
    Query(resource): Query<TableRowsQueryResource>,
) -> Result<Json<TableMetadataResource>, (StatusCode, Json<TableInspectorErrorResponseResource>)> {
    let query = TableMetadataQuery::new(
        database_name,
        resource
            .schema
            .unwrap_or_else(|| DEFAULT_SCHEMA.to_string()),
        table_name,
    )
    .map_err(map_domain_error)?;

    let metadata = state
        .query_service
        .handle_table_metadata(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(metadata.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/databases/{database_name}/tables/{table_name}",
    tag = "table-inspector",
    params(
        ("database_name" = String, Path, description = "Nombre de base de datos"),
        ("table_name" = String, Path, description = "Nombre de tabla"),
        ("schema" = Option<String>, Query, description = "Schema, por defecto public"),
        ("limit" = Option<i64>, Query, description = "Cantidad máxima de filas (1..=500)"),
        ("offset" = Option<i64>, Query, description = "Desplazamiento de la muestra"),
        ("order_by" = Option<String>, Query, description = "Columna de ordenamiento"),
        ("order_dir" = Option<String>, Query, description = "asc o desc")
    ),
    responses(
        (status = 200, description = "Columnas y muestra de filas", body = TableViewResource),
        (status = 400, description = "Parámetros inválidos", body = TableInspectorErrorResponseResource),
        (status = 404, description = "Base de datos o tabla no encontrada", body = TableInspectorErrorResponseResource),
        (status = 500, description = "Error interno", body = TableInspectorErrorResponseResource)
    )
)]
pub async fn view_table(
    State(state): State<TableInspectorRestControllerState>,
    Path((database_name, table_name)): Path<(String, String)>,
    Query(resource): Query<TableRowsQueryResource>,
) -> Result<Json<TableViewResource>, (StatusCode, Json<TableInspectorErrorResponseResource>)> {
    let query = TableRowsQuery::new(TableRowsQueryParts {
        database_name,
        schema_name: resource
            .schema
            .unwrap_or_else(|| DEFAULT_SCHEMA.to_string()),
        table_name,
        limit: resource.limit.unwrap_or(DEFAULT_ROW_SAMPLE_LIMIT),
        offset: resource.offset.unwrap_or(0),
        order_by: resource.order_by,
        order_desc: resource.order_dir.as_deref() == Some("desc"),
    })
    .map_err(map_domain_error)?;

    let (metadata, rows) = state
        .query_service
        .handle_table_view(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(TableViewResource::from_parts(metadata, rows)))
}

fn map_domain_error(
    error: TableInspectorDomainError,
) -> (StatusCode, Json<TableInspectorErrorResponseResource>) {
    let status = match error {
        TableInspectorDomainError::InvalidDatabaseName
        | TableInspectorDomainError::InvalidSchemaName
        | TableInspectorDomainError::InvalidTableName
        | TableInspectorDomainError::InvalidQueryParameters => StatusCode::BAD_REQUEST,
        TableInspectorDomainError::DatabaseNotFound
        | TableInspectorDomainError::TableNotFound => StatusCode::NOT_FOUND,
        TableInspectorDomainError::ConnectionError(_)
        | TableInspectorDomainError::QueryError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(TableInspectorErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
