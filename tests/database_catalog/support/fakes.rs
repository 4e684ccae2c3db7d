use std::sync::Mutex;

use async_trait::async_trait;
use table_browser_api::database_catalog::{
    domain::model::{
        enums::database_catalog_domain_error::DatabaseCatalogDomainError,
        value_objects::{database_name::DatabaseName, schema_name::SchemaName},
    },
    infrastructure::persistence::repositories::database_catalog_repository::DatabaseCatalogRepository,
};

#[derive(Default)]
struct FakeDatabaseCatalogRepositoryState {
    list_database_calls: usize,
    list_table_calls: usize,
    last_database_name: Option<String>,
    last_schema_name: Option<String>,
    unknown_database: bool,
}

pub struct FakeDatabaseCatalogRepository {
    state: Mutex<FakeDatabaseCatalogRepositoryState>,
}

impl FakeDatabaseCatalogRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeDatabaseCatalogRepositoryState::default()),
        }
    }

    pub fn set_unknown_database(&self, value: bool) {
        self.state.lock().expect("mutex poisoned").unknown_database = value;
    }

    pub fn list_table_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").list_table_calls
    }

    pub fn last_database_name(&self) -> Option<String> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .last_database_name
            .clone()
    }

    pub fn last_schema_name(&self) -> Option<String> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .last_schema_name
            .clone()
    }
}

#[async_trait]
impl DatabaseCatalogRepository for FakeDatabaseCatalogRepository {
    async fn list_databases(&self) -> Result<Vec<String>, DatabaseCatalogDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.list_database_calls += 1;
        Ok(vec!["postgres".to_string(), "tienda1".to_string()])
    }

    async fn list_tables(
        &self,
        database_name: &DatabaseName,
        schema_name: &SchemaName,
    ) -> Result<Vec<String>, DatabaseCatalogDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.list_table_calls += 1;
        state.last_database_name = Some(database_name.value().to_string());
        state.last_schema_name = Some(schema_name.value().to_string());

        if state.unknown_database {
            return Err(DatabaseCatalogDomainError::DatabaseNotFound);
        }

        Ok(vec!["productos".to_string(), "usuarios".to_string()])
    }
}
