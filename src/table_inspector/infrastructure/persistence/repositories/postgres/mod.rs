pub mod sqlx_database_connection_resolver_repository_impl;
pub mod sqlx_database_pool_cache_repository_impl;
pub mod sqlx_table_catalog_repository_impl;
