pub mod sqlx_database_catalog_repository_impl;
