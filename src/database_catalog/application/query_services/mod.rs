pub mod database_catalog_query_service_impl;
