pub mod registry;
pub mod schema_model;
