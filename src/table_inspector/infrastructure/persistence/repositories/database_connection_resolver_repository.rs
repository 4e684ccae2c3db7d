use async_trait::async_trait;

use crate::table_inspector::domain::model::{
    enums::table_inspector_domain_error::TableInspectorDomainError,
    value_objects::database_name::DatabaseName,
};

#[async_trait]
pub trait DatabaseConnectionResolverRepository: Send + Sync {
    async fn resolve_database_url(
        &self,
        database_name: &DatabaseName,
    ) -> Result<String, TableInspectorDomainError>;
}
