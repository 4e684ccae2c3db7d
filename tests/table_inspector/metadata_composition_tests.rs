use table_browser_api::table_inspector::domain::model::{
    entities::{
        catalog_records::{ColumnRecord, ForeignKeyColumnRecord, PrimaryKeyColumnRecord},
        table_metadata::TableMetadata,
    },
    enums::table_inspector_domain_error::TableInspectorDomainError,
    value_objects::{schema_name::SchemaName, table_name::TableName},
};

fn column(name: &str, ordinal: i32) -> ColumnRecord {
    ColumnRecord {
        column_name: name.to_string(),
        data_type: "text".to_string(),
        is_nullable: true,
        default_value: None,
        ordinal_position: ordinal,
    }
}

fn primary_key(name: &str) -> PrimaryKeyColumnRecord {
    PrimaryKeyColumnRecord {
        column_name: name.to_string(),
    }
}

fn foreign_key(name: &str, table: &str, target: &str) -> ForeignKeyColumnRecord {
    ForeignKeyColumnRecord {
        column_name: name.to_string(),
        referenced_table: table.to_string(),
        referenced_column: target.to_string(),
    }
}

fn schema() -> SchemaName {
    SchemaName::new("public".to_string()).expect("valid schema")
}

fn table(name: &str) -> TableName {
    TableName::new(name.to_string()).expect("valid table")
}

#[test]
fn compose_orders_columns_by_ordinal_position_regardless_of_input_order() {
    let columns = vec![
        column("tercera", 3),
        column("primera", 1),
        column("segunda", 2),
    ];

    let metadata = TableMetadata::compose(
        &schema(),
        &table("desordenada"),
        columns,
        Vec::new(),
        Vec::new(),
    )
    .expect("composition succeeds");

    let names: Vec<&str> = metadata
        .columns
        .iter()
        .map(|c| c.column_name.as_str())
        .collect();
    assert_eq!(names, vec!["primera", "segunda", "tercera"]);
}

#[test]
fn compose_without_constraints_keeps_every_column_unflagged() {
    let columns = vec![column("a", 1), column("b", 2), column("c", 3)];

    let metadata = TableMetadata::compose(
        &schema(),
        &table("sin_constraints"),
        columns,
        Vec::new(),
        Vec::new(),
    )
    .expect("composition succeeds");

    assert_eq!(metadata.columns.len(), 3);
    for column in &metadata.columns {
        assert!(!column.is_primary_key);
        assert!(!column.is_foreign_key);
        assert_eq!(column.referenced_table, None);
        assert_eq!(column.referenced_column, None);
    }
}

#[test]
fn compose_flags_every_member_of_a_composite_primary_key() {
    let columns = vec![
        column("pedido_id", 1),
        column("producto_id", 2),
        column("cantidad", 3),
    ];
    let primary_keys = vec![primary_key("pedido_id"), primary_key("producto_id")];

    let metadata = TableMetadata::compose(
        &schema(),
        &table("pedido_items"),
        columns,
        primary_keys,
        Vec::new(),
    )
    .expect("composition succeeds");

    assert!(metadata.columns[0].is_primary_key);
    assert!(metadata.columns[1].is_primary_key);
    assert!(!metadata.columns[2].is_primary_key);
}

#[test]
fn compose_attaches_foreign_key_target_only_to_referencing_columns() {
    let columns = vec![
        column("id", 1),
        column("email", 2),
        column("manager_id", 3),
    ];
    let primary_keys = vec![primary_key("id")];
    let foreign_keys = vec![foreign_key("manager_id", "usuarios", "id")];

    let metadata = TableMetadata::compose(
        &schema(),
        &table("usuarios"),
        columns,
        primary_keys,
        foreign_keys,
    )
    .expect("composition succeeds");

    let id = &metadata.columns[0];
    assert!(id.is_primary_key);
    assert!(!id.is_foreign_key);
    assert_eq!(id.referenced_table, None);

    let email = &metadata.columns[1];
    assert!(!email.is_primary_key);
    assert!(!email.is_foreign_key);

    let manager = &metadata.columns[2];
    assert!(!manager.is_primary_key);
    assert!(manager.is_foreign_key);
    assert_eq!(manager.referenced_table.as_deref(), Some("usuarios"));
    assert_eq!(manager.referenced_column.as_deref(), Some("id"));
}

#[test]
fn compose_keeps_the_first_target_when_a_column_has_several_foreign_keys() {
    let columns = vec![column("sucursal_id", 1)];
    let foreign_keys = vec![
        foreign_key("sucursal_id", "sucursales", "id"),
        foreign_key("sucursal_id", "sucursales_historico", "id"),
    ];

    let metadata = TableMetadata::compose(
        &schema(),
        &table("ventas"),
        columns,
        Vec::new(),
        foreign_keys,
    )
    .expect("composition succeeds");

    assert_eq!(metadata.columns.len(), 1);
    let column = &metadata.columns[0];
    assert!(column.is_foreign_key);
    assert_eq!(column.referenced_table.as_deref(), Some("sucursales"));
    assert_eq!(column.referenced_column.as_deref(), Some("id"));
}

#[test]
fn compose_fails_with_table_not_found_when_no_columns_exist() {
    let result = TableMetadata::compose(
        &schema(),
        &table("inexistente"),
        Vec::new(),
        Vec::new(),
        Vec::new(),
    );

    assert!(matches!(
        result,
        Err(TableInspectorDomainError::TableNotFound)
    ));
}

#[test]
fn compose_is_deterministic_for_identical_inputs() {
    let build = || {
        TableMetadata::compose(
            &schema(),
            &table("usuarios"),
            vec![column("manager_id", 3), column("id", 1), column("email", 2)],
            vec![primary_key("id")],
            vec![foreign_key("manager_id", "usuarios", "id")],
        )
        .expect("composition succeeds")
    };

    assert_eq!(build(), build());
}

#[test]
fn metadata_round_trips_through_json_without_loss() {
    let metadata = TableMetadata::compose(
        &schema(),
        &table("usuarios"),
        vec![
            ColumnRecord {
                column_name: "id".to_string(),
                data_type: "integer".to_string(),
                is_nullable: false,
                default_value: Some("nextval('usuarios_id_seq'::regclass)".to_string()),
                ordinal_position: 1,
            },
            column("manager_id", 2),
        ],
        vec![primary_key("id")],
        vec![foreign_key("manager_id", "usuarios", "id")],
    )
    .expect("composition succeeds");

    let serialized = serde_json::to_string(&metadata).expect("serializes");
    let deserialized: TableMetadata = serde_json::from_str(&serialized).expect("deserializes");

    assert_eq!(metadata, deserialized);
}
