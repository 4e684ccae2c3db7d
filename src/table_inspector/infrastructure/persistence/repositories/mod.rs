pub mod database_connection_resolver_repository;
pub mod database_pool_cache_repository;
pub mod postgres;
pub mod table_catalog_repository;
