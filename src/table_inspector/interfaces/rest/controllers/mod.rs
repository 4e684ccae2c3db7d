pub mod table_inspector_rest_controller;
