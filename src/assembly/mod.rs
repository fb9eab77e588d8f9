pub mod context;
pub mod listener;
pub mod page;
pub mod view_vars;
