/// Typed projections of the three catalog result sets. The repository maps
/// raw rows into these before anything reaches the composer.
#[derive(Clone, Debug)]
pub struct ColumnRecord {
    pub column_name: String,
    pub data_type: String,
    pub is_nullable: bool,
    pub default_value: Option<String>,
    pub ordinal_position: i32,
}

#[derive(Clone, Debug)]
pub struct PrimaryKeyColumnRecord {
    pub column_name: String,
}

#[derive(Clone, Debug)]
pub struct ForeignKeyColumnRecord {
    pub column_name: String,
    pub referenced_table: String,
    pub referenced_column: String,
}
