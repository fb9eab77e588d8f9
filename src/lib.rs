//! Display metadata for generic CRUD screens.
//!
//! Given a model's schema and association graph plus per-action scaffold
//! configuration, the resolvers work out which fields to show (and in
//! which form tabs), which actions to link and how, and which related
//! models to load. `assembly::listener::ScaffoldListener` runs them once
//! per render cycle and publishes a `ViewVars` bag for the templates.

use crate::assembly::{context::ExecutionContext, listener::ScaffoldListener, view_vars::ViewVars};

pub mod action;
pub mod assembly;
pub mod association;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod field;
pub mod inflect;
pub mod model;

/// Resolve the view variables of `ctx` in one go, without query hooks.
///
/// Equivalent to a render cycle where no record was loaded through the
/// listener. Returns `None` for the error controller.
pub fn resolve_view(ctx: &ExecutionContext) -> Option<ViewVars> {
    ScaffoldListener::new().before_render(ctx)
}

