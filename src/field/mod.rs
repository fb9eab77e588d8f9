pub mod field_model;
pub mod resolver;
pub mod tab_groups;
