use table_browser_api::database_catalog::domain::{
    model::{
        enums::database_catalog_domain_error::DatabaseCatalogDomainError,
        queries::{list_databases_query::ListDatabasesQuery, list_tables_query::ListTablesQuery},
    },
    services::database_catalog_query_service::DatabaseCatalogQueryService,
};

use crate::support::create_query_harness;

#[tokio::test]
async fn handle_list_databases_returns_server_databases() {
    let harness = create_query_harness();

    let databases = harness
        .service
        .handle_list_databases(ListDatabasesQuery::new())
        .await
        .expect("listing succeeds");

    assert_eq!(databases, vec!["postgres", "tienda1"]);
}

#[tokio::test]
async fn handle_list_tables_passes_validated_identifiers_to_the_repository() {
    let harness = create_query_harness();

    let query = ListTablesQuery::new("tienda1".to_string(), "public".to_string())
        .expect("valid query");
    let tables = harness
        .service
        .handle_list_tables(query)
        .await
        .expect("listing succeeds");

    assert_eq!(tables, vec!["productos", "usuarios"]);
    assert_eq!(harness.repository.list_table_calls(), 1);
    assert_eq!(
        harness.repository.last_database_name().as_deref(),
        Some("tienda1")
    );
    assert_eq!(
        harness.repository.last_schema_name().as_deref(),
        Some("public")
    );
}

#[tokio::test]
async fn handle_list_tables_propagates_database_not_found() {
    let harness = create_query_harness();
    harness.repository.set_unknown_database(true);

    let query = ListTablesQuery::new("desconocida".to_string(), "public".to_string())
        .expect("valid query");
    let result = harness.service.handle_list_tables(query).await;

    assert!(matches!(
        result,
        Err(DatabaseCatalogDomainError::DatabaseNotFound)
    ));
}

#[test]
fn list_tables_query_rejects_invalid_identifiers() {
    assert!(matches!(
        ListTablesQuery::new("Tienda;DROP".to_string(), "public".to_string()),
        Err(DatabaseCatalogDomainError::InvalidDatabaseName)
    ));
    assert!(matches!(
        ListTablesQuery::new("tienda1".to_string(), "pg catalog".to_string()),
        Err(DatabaseCatalogDomainError::InvalidSchemaName)
    ));
}
