use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseCatalogDomainError {
    #[error("database name is invalid")]
    InvalidDatabaseName,

    #[error("schema name is invalid")]
    InvalidSchemaName,

    #[error("database not found")]
    DatabaseNotFound,

    #[error("connection error: {0}")]
    ConnectionError(String),

    #[error("catalog query failed: {0}")]
    QueryError(String),
}
