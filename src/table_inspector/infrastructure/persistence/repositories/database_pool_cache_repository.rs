use async_trait::async_trait;
use sqlx::PgPool;

use crate::table_inspector::domain::model::enums::table_inspector_domain_error::TableInspectorDomainError;

#[async_trait]
pub trait DatabasePoolCacheRepository: Send + Sync {
    async fn get_or_create_pool(
        &self,
        database_url: &str,
    ) -> Result<PgPool, TableInspectorDomainError>;
}
