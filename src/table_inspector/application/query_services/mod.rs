pub mod table_inspector_query_service_impl;
