use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    config::app_config::AppConfig,
    database_catalog::{
        application::query_services::database_catalog_query_service_impl::DatabaseCatalogQueryServiceImpl,
        infrastructure::persistence::repositories::postgres::sqlx_database_catalog_repository_impl::SqlxDatabaseCatalogRepositoryImpl,
        interfaces::rest::controllers::database_catalog_rest_controller::{
            DatabaseCatalogRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_database_catalog_router(config: &AppConfig) -> Result<Router, String> {
    let admin_pool = PgPool::connect(&config.admin_database_url())
        .await
        .map_err(|e| e.to_string())?;

    let repository = Arc::new(SqlxDatabaseCatalogRepositoryImpl::new(
        admin_pool,
        config.clone(),
    ));
    let query_service = Arc::new(DatabaseCatalogQueryServiceImpl::new(repository));

    Ok(router(DatabaseCatalogRestControllerState { query_service }))
}
