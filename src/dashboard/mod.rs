pub mod action_link_item;
pub mod dashboard_model;
pub mod link_item;
