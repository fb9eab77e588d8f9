use tracing::{debug, info};

use crate::assembly::context::{ExecutionContext, Query};
use crate::assembly::view_vars::ViewVars;
use crate::association::association_model::Associations;
use crate::association::related::{RelatedModels, related_models};
use crate::association::resolver::resolve_associations;
use crate::model::schema_model::PAGINATE_CONTAIN_TYPES;

/// Controller whose pages are never scaffolded.
pub const ERROR_CONTROLLER: &str = "Error";

/// Hooks one request's lifecycle into the resolvers.
///
/// The association map is computed once per cycle: the query hook stores
/// it and the render hook consumes it, so the next cycle starts fresh.
#[derive(Debug, Default)]
pub struct ScaffoldListener {
    associations: Option<Associations>,
}

impl ScaffoldListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Before loading a single record: remember the associations and
    /// contain every related model unless the query already contains some.
    pub fn before_find(&mut self, ctx: &ExecutionContext, query: &mut Query) {
        let related = related_models(&ctx.table, &ctx.config, &[]);
        self.associations = Some(associations_for(ctx, &related));

        if !query.has_contain() {
            debug!(count = related.len(), "containing related models");
            query.contain = related;
        }
    }

    /// Before paginating a listing: like `before_find`, but only
    /// to-one associations are contained.
    pub fn before_paginate(&mut self, ctx: &ExecutionContext, query: &mut Query) {
        let related = related_models(&ctx.table, &ctx.config, &[]);
        self.associations = Some(associations_for(ctx, &related));

        if !query.has_contain() {
            let to_one = related_models(&ctx.table, &ctx.config, &PAGINATE_CONTAIN_TYPES);
            debug!(count = to_one.len(), "containing to-one related models");
            query.contain = to_one;
        }
    }

    /// Assemble the view variables for the page. Returns `None` for the
    /// error controller. Either way the memo is consumed, so the next cycle
    /// starts fresh.
    pub fn before_render(&mut self, ctx: &ExecutionContext) -> Option<ViewVars> {
        let cached = self.associations.take();
        if ctx.controller.name == ERROR_CONTROLLER {
            return None;
        }

        let associations = match cached {
            Some(cached) => {
                debug!("reusing associations from query hook");
                cached
            }
            None => {
                let related = related_models(&ctx.table, &ctx.config, &[]);
                associations_for(ctx, &related)
            }
        };

        let vars = ViewVars::assemble(ctx, associations);
        info!(
            controller = %ctx.controller.name,
            action = %ctx.action,
            fields = vars.fields.len(),
            "scaffold view resolved"
        );
        Some(vars)
    }

    /// Whether a query hook has stored associations for this cycle.
    pub fn has_cached_associations(&self) -> bool {
        self.associations.is_some()
    }
}

/// Associations of the related models. No related models means no
/// associations (not all of them).
pub fn associations_for(ctx: &ExecutionContext, related: &RelatedModels) -> Associations {
    if related.is_empty() {
        return Associations::new();
    }
    let whitelist: Vec<String> = related.keys().cloned().collect();
    resolve_associations(&ctx.table, &ctx.config, &whitelist)
}
