pub mod database_catalog_rest_controller;
