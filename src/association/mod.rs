pub mod association_model;
pub mod related;
pub mod resolver;
