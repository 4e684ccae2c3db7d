use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::table_inspector::{
    domain::model::enums::table_inspector_domain_error::TableInspectorDomainError,
    infrastructure::persistence::repositories::database_pool_cache_repository::DatabasePoolCacheRepository,
};

pub struct SqlxDatabasePoolCacheRepositoryImpl {
    pools: Arc<RwLock<HashMap<String, PgPool>>>,
}

impl SqlxDatabasePoolCacheRepositoryImpl {
    pub fn new() -> Self {
        Self {
            pools: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for SqlxDatabasePoolCacheRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatabasePoolCacheRepository for SqlxDatabasePoolCacheRepositoryImpl {
    async fn get_or_create_pool(
        &self,
        database_url: &str,
    ) -> Result<PgPool, TableInspectorDomainError> {
        {
            let read_guard = self.pools.read().await;
            if let Some(pool) = read_guard.get(database_url) {
                return Ok(pool.clone());
            }
        }

        let pool = PgPool::connect(database_url)
            .await
            .map_err(|e| TableInspectorDomainError::ConnectionError(e.to_string()))?;

        let mut write_guard = self.pools.write().await;
        if let Some(existing) = write_guard.get(database_url) {
            return Ok(existing.clone());
        }

        write_guard.insert(database_url.to_string(), pool.clone());
        Ok(pool)
    }
}
