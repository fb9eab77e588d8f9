use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::action::action_model::ControllerActions;
use crate::action::filter::allowed_actions;
use crate::action::grouping::{action_groups, controller_actions, declared_action_groups};
use crate::assembly::context::ExecutionContext;
use crate::assembly::page::{PageVariables, page_title, page_variables};
use crate::association::association_model::Associations;
use crate::field::field_model::FieldSet;
use crate::field::resolver::{fields_blacklist, resolve_fields};
use crate::field::tab_groups::form_tab_groups;

/// Everything published to the template renderer for one page, under the
/// variable names the templates read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewVars {
    pub action_config: Value,
    pub title: String,
    pub breadcrumbs: Value,
    pub associations: Associations,
    pub fields: FieldSet,
    pub form_tab_groups: IndexMap<String, Vec<String>>,
    pub blacklist: Vec<String>,
    pub actions: ControllerActions,
    pub bulk_actions: Value,
    pub viewblocks: Value,
    pub action_groups: IndexMap<String, Vec<String>>,

    #[serde(flatten)]
    pub page: PageVariables,
}

impl ViewVars {
    /// Run every resolver against `ctx`. Associations come in already
    /// resolved; fields depend on them, actions do not.
    pub fn assemble(ctx: &ExecutionContext, associations: Associations) -> Self {
        let config = &ctx.config;
        let scope = ctx.scope();

        let fields = resolve_fields(config, scope, &ctx.table, &associations);
        let form_tab_groups = form_tab_groups(config, &fields);

        let allowed = allowed_actions(config, &ctx.registry);
        let groups = declared_action_groups(config);
        let actions = controller_actions(&allowed, &groups, &ctx.registry);
        let action_groups = action_groups(&allowed, &groups);

        Self {
            action_config: config.root().clone(),
            title: page_title(ctx),
            breadcrumbs: config.get_or("scaffold.breadcrumbs", Value::Array(vec![])),
            associations,
            fields,
            form_tab_groups,
            blacklist: fields_blacklist(config),
            actions,
            bulk_actions: config.get_or("scaffold.bulk_actions", Value::Array(vec![])),
            viewblocks: config.get_or("scaffold.viewblocks", Value::Array(vec![])),
            action_groups,
            page: page_variables(ctx),
        }
    }
}
