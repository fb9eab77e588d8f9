pub mod action_model;
pub mod filter;
pub mod grouping;
pub mod normalize;
pub mod resolver;
