pub mod database_catalog_domain_error;
