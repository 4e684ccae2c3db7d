use crate::database_catalog::domain::model::enums::database_catalog_domain_error::DatabaseCatalogDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DatabaseName(String);

impl DatabaseName {
    pub fn new(value: String) -> Result<Self, DatabaseCatalogDomainError> {
        let valid = !value.trim().is_empty()
            && value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

        if !valid {
            return Err(DatabaseCatalogDomainError::InvalidDatabaseName);
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
