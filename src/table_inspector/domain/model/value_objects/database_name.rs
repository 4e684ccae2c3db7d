use crate::table_inspector::domain::model::enums::table_inspector_domain_error::TableInspectorDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DatabaseName(String);

impl DatabaseName {
    pub fn new(value: String) -> Result<Self, TableInspectorDomainError> {
        let valid = !value.trim().is_empty()
            && value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

        if !valid {
            return Err(TableInspectorDomainError::InvalidDatabaseName);
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
