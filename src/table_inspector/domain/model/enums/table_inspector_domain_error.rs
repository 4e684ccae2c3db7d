use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableInspectorDomainError {
    #[error("database name is invalid")]
    InvalidDatabaseName,

    #[error("schema name is invalid")]
    InvalidSchemaName,

    #[error("table name is invalid")]
    InvalidTableName,

    #[error("invalid sort or pagination parameters")]
    InvalidQueryParameters,

    #[error("database not found")]
    DatabaseNotFound,

    #[error("table not found")]
    TableNotFound,

    #[error("connection error: {0}")]
    ConnectionError(String),

    #[error("catalog query failed: {0}")]
    QueryError(String),
}
