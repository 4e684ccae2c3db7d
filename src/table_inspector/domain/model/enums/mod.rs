pub mod table_inspector_domain_error;
