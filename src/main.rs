use axum::Router;
use dotenvy::dotenv;
use table_browser_api::{
    config::app_config::AppConfig,
    database_catalog::{
        build_database_catalog_router,
        interfaces::rest::resources::{
            database_catalog_error_response_resource::DatabaseCatalogErrorResponseResource,
            database_summary_resource::DatabaseSummaryResource,
            list_tables_query_resource::ListTablesQueryResource,
            table_summary_resource::TableSummaryResource,
        },
    },
    table_inspector::{
        build_table_inspector_router,
        interfaces::rest::resources::{
            table_inspector_error_response_resource::TableInspectorErrorResponseResource,
            table_metadata_resource::{ColumnMetadataResource, TableMetadataResource},
            table_rows_query_resource::TableRowsQueryResource,
            table_view_resource::TableViewResource,
        },
    },
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        table_browser_api::database_catalog::interfaces::rest::controllers::database_catalog_rest_controller::list_databases,
        table_browser_api::database_catalog::interfaces::rest::controllers::database_catalog_rest_controller::list_tables,
        table_browser_api::table_inspector::interfaces::rest::controllers::table_inspector_rest_controller::introspect_table_schema,
        table_browser_api::table_inspector::interfaces::rest::controllers::table_inspector_rest_controller::view_table
    ),
    components(
        schemas(
            DatabaseSummaryResource,
            TableSummaryResource,
            ListTablesQueryResource,
            DatabaseCatalogErrorResponseResource,
            ColumnMetadataResource,
            TableMetadataResource,
            TableRowsQueryResource,
            TableViewResource,
            TableInspectorErrorResponseResource
        )
    ),
    tags(
        (name = "database-catalog", description = "Listado de bases de datos y tablas"),
        (name = "table-inspector", description = "Introspección de esquema y muestra de filas")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    let config = AppConfig::from_env();

    let database_catalog_router = build_database_catalog_router(&config)
        .await
        .expect("failed to build database catalog router");
    let table_inspector_router = build_table_inspector_router(&config)
        .await
        .expect("failed to build table inspector router");

    let app = Router::new()
        .merge(database_catalog_router)
        .merge(table_inspector_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!("Servidor corriendo en http://localhost:{}", config.port);
    tracing::info!(
        "Swagger UI disponible en http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
