use crate::table_inspector::domain::model::{
    enums::table_inspector_domain_error::TableInspectorDomainError,
    value_objects::{
        database_name::DatabaseName, schema_name::SchemaName, table_name::TableName,
    },
};

#[derive(Clone, Debug)]
pub struct TableRowsQuery {
    database_name: DatabaseName,
    schema_name: SchemaName,
    table_name: TableName,
    limit: i64,
    offset: i64,
    order_by: Option<String>,
    order_desc: bool,
}

pub struct TableRowsQueryParts {
    pub database_name: String,
    pub schema_name: String,
    pub table_name: String,
    pub limit: i64,
    pub offset: i64,
    pub order_by: Option<String>,
    pub order_desc: bool,
}

impl TableRowsQuery {
    pub fn new(parts: TableRowsQueryParts) -> Result<Self, TableInspectorDomainError> {
        if parts.limit <= 0 || parts.limit > 500 || parts.offset < 0 {
            return Err(TableInspectorDomainError::InvalidQueryParameters);
        }

        Ok(Self {
            database_name: DatabaseName::new(parts.database_name)?,
            schema_name: SchemaName::new(parts.schema_name)?,
            table_name: TableName::new(parts.table_name)?,
            limit: parts.limit,
            offset: parts.offset,
            order_by: parts.order_by,
            order_desc: parts.order_desc,
        })
    }

    pub fn database_name(&self) -> &DatabaseName {
        &self.database_name
    }
    pub fn schema_name(&self) -> &SchemaName {
        &self.schema_name
    }
    pub fn table_name(&self) -> &TableName {
        &self.table_name
    }
    pub fn limit(&self) -> i64 {
        self.limit
    }
    pub fn offset(&self) -> i64 {
        self.offset
    }
    pub fn order_by(&self) -> Option<&str> {
        self.order_by.as_deref()
    }
    pub fn order_desc(&self) -> bool {
        self.order_desc
    }
}
