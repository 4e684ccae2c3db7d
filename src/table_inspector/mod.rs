use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    config::app_config::AppConfig,
    table_inspector::{
        application::query_services::table_inspector_query_service_impl::TableInspectorQueryServiceImpl,
        infrastructure::persistence::repositories::postgres::{
            sqlx_database_connection_resolver_repository_impl::SqlxDatabaseConnectionResolverRepositoryImpl,
            sqlx_database_pool_cache_repository_impl::SqlxDatabasePoolCacheRepositoryImpl,
            sqlx_table_catalog_repository_impl::SqlxTableCatalogRepositoryImpl,
        },
        interfaces::rest::controllers::table_inspector_rest_controller::{
            TableInspectorRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_table_inspector_router(config: &AppConfig) -> Result<Router, String> {
    let admin_pool = PgPool::connect(&config.admin_database_url())
        .await
        .map_err(|e| e.to_string())?;

    let connection_resolver = Arc::new(SqlxDatabaseConnectionResolverRepositoryImpl::new(
        admin_pool,
        config.clone(),
    ));
    let pool_cache = Arc::new(SqlxDatabasePoolCacheRepositoryImpl::new());
    let repository = Arc::new(SqlxTableCatalogRepositoryImpl::new(
        connection_resolver,
        pool_cache,
    ));
    let query_service = Arc::new(TableInspectorQueryServiceImpl::new(repository));

    Ok(router(TableInspectorRestControllerState { query_service }))
}
