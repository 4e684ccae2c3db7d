use table_browser_api::table_inspector::domain::{
    model::{
        enums::table_inspector_domain_error::TableInspectorDomainError,
        queries::table_rows_query::{TableRowsQuery, TableRowsQueryParts},
    },
    services::table_inspector_query_service::TableInspectorQueryService,
};

use crate::support::{
    create_query_harness, fixtures, table_metadata_query, table_rows_query,
};

#[tokio::test]
async fn handle_table_metadata_merges_the_three_catalog_result_sets() {
    let harness = create_query_harness();

    let metadata = harness
        .service
        .handle_table_metadata(table_metadata_query())
        .await
        .expect("introspection succeeds");

    assert_eq!(metadata.schema_name, "public");
    assert_eq!(metadata.table_name, "usuarios");

    let names: Vec<&str> = metadata
        .columns
        .iter()
        .map(|c| c.column_name.as_str())
        .collect();
    assert_eq!(names, vec!["id", "email", "manager_id"]);

    assert!(metadata.columns[0].is_primary_key);
    assert!(!metadata.columns[1].is_nullable);
    assert!(metadata.columns[2].is_foreign_key);
    assert_eq!(
        metadata.columns[2].referenced_table.as_deref(),
        Some("usuarios")
    );

    assert_eq!(harness.repository.column_calls(), 1);
    assert_eq!(harness.repository.primary_key_calls(), 1);
    assert_eq!(harness.repository.foreign_key_calls(), 1);
    assert_eq!(
        harness.repository.last_database_name().as_deref(),
        Some("tienda1")
    );
}

#[tokio::test]
async fn handle_table_metadata_is_idempotent_against_an_unchanged_catalog() {
    let harness = create_query_harness();

    let first = harness
        .service
        .handle_table_metadata(table_metadata_query())
        .await
        .expect("introspection succeeds");
    let second = harness
        .service
        .handle_table_metadata(table_metadata_query())
        .await
        .expect("introspection succeeds");

    assert_eq!(first, second);
}

#[tokio::test]
async fn handle_table_metadata_returns_not_found_for_a_missing_table() {
    let harness = create_query_harness();
    harness.repository.set_empty_columns();

    let result = harness
        .service
        .handle_table_metadata(table_metadata_query())
        .await;

    assert!(matches!(
        result,
        Err(TableInspectorDomainError::TableNotFound)
    ));
}

#[tokio::test]
async fn handle_table_view_returns_rows_untouched_with_ordered_columns() {
    let harness = create_query_harness();

    let (metadata, rows) = harness
        .service
        .handle_table_view(table_rows_query(Some("email")))
        .await
        .expect("view succeeds");

    assert_eq!(metadata.column_names(), vec!["id", "email", "manager_id"]);
    assert_eq!(rows, fixtures::sample_rows());

    let criteria = harness
        .repository
        .last_row_sample_criteria()
        .expect("row sample criteria captured");
    assert_eq!(criteria.schema_name, "public");
    assert_eq!(criteria.table_name, "usuarios");
    assert_eq!(criteria.limit, 100);
    assert_eq!(criteria.offset, 0);
    assert_eq!(criteria.order_by.as_deref(), Some("email"));
    assert!(!criteria.order_desc);
}

#[tokio::test]
async fn handle_table_view_rejects_sorting_by_an_unknown_column() {
    let harness = create_query_harness();

    let result = harness
        .service
        .handle_table_view(table_rows_query(Some("columna_inexistente")))
        .await;

    assert!(matches!(
        result,
        Err(TableInspectorDomainError::InvalidQueryParameters)
    ));
    assert_eq!(harness.repository.row_sample_calls(), 0);
}

#[test]
fn table_rows_query_rejects_out_of_range_pagination() {
    let build = |limit: i64, offset: i64| {
        TableRowsQuery::new(TableRowsQueryParts {
            database_name: "tienda1".to_string(),
            schema_name: "public".to_string(),
            table_name: "usuarios".to_string(),
            limit,
            offset,
            order_by: None,
            order_desc: false,
        })
    };

    assert!(matches!(
        build(0, 0),
        Err(TableInspectorDomainError::InvalidQueryParameters)
    ));
    assert!(matches!(
        build(501, 0),
        Err(TableInspectorDomainError::InvalidQueryParameters)
    ));
    assert!(matches!(
        build(100, -1),
        Err(TableInspectorDomainError::InvalidQueryParameters)
    ));
}
