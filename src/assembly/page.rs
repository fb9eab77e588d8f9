use serde::Serialize;
use serde_json::Value;

use crate::action::action_model::ActionScope;
use crate::assembly::context::ExecutionContext;
use crate::config::config_tree::{display_value, is_empty_value, lookup};
use crate::inflect::inflector::{humanize, singularize, underscore, variable};

// ============================================================================
// Page title
// ============================================================================

/// Title of the page being rendered.
///
/// `scaffold.page_title` wins when set. Collection pages read
/// `"Blog Posts"` for index and `"Blog Posts Export"` otherwise; item pages
/// read `"Edit Blog Post #3: Hello"`, dropping the display value when it is
/// unknown or the display field is the primary key, and the `#id` part
/// when no record is at hand.
pub fn page_title(ctx: &ExecutionContext) -> String {
    if let Some(title) = ctx.config.non_empty_str("scaffold.page_title") {
        return title.to_string();
    }

    let scope = ctx.scope();
    let action_name = humanize(&underscore(&ctx.action));
    let controller_name = controller_title(ctx, scope);

    if scope == ActionScope::Collection {
        if action_name == "Index" {
            return controller_name;
        }
        return format!("{} {}", controller_name, action_name);
    }

    let Some(primary_key_value) = primary_key_value(ctx) else {
        return format!("{} {}", action_name, controller_name);
    };

    let display_field_value = display_field_value(ctx);
    match display_field_value {
        Some(display) if ctx.table.display_field() != ctx.table.primary_key => format!(
            "{} {} #{}: {}",
            action_name,
            controller_name,
            display_value(&primary_key_value),
            display_value(&display)
        ),
        _ => format!(
            "{} {} #{}",
            action_name,
            controller_name,
            display_value(&primary_key_value)
        ),
    }
}

/// Human controller name, singular on item pages: `Blog Posts` / `Blog Post`.
pub fn controller_title(ctx: &ExecutionContext, scope: ActionScope) -> String {
    let name = humanize(&underscore(&ctx.controller.name));
    match scope {
        ActionScope::Item => singularize(&name),
        ActionScope::Collection => name,
    }
}

// ============================================================================
// Record values
// ============================================================================

pub fn primary_key_value(ctx: &ExecutionContext) -> Option<Value> {
    derive_field_from_context(ctx, &ctx.table.primary_key)
}

pub fn display_field_value(ctx: &ExecutionContext) -> Option<Value> {
    derive_field_from_context(ctx, ctx.table.display_field())
}

/// Value of `field` for the current record: the entity's own value when it
/// has a non-empty one, else the submitted form data under
/// `<ModelClass>.<field>`, else nothing.
pub fn derive_field_from_context(ctx: &ExecutionContext, field: &str) -> Option<Value> {
    let entity_value = ctx
        .entity
        .as_ref()
        .and_then(|entity| entity.get(field))
        .filter(|v| !is_empty_value(v));
    if let Some(value) = entity_value {
        return Some(value.clone());
    }

    ctx.request_data
        .get(ctx.controller.model_class())
        .and_then(|submitted| lookup(submitted, field))
        .cloned()
}

// ============================================================================
// Page variables
// ============================================================================

/// Naming variables every scaffolded template reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageVariables {
    pub model_class: String,
    pub model_schema: Vec<String>,
    pub display_field: String,
    pub singular_human_name: String,
    pub plural_human_name: String,
    pub singular_var: String,
    pub plural_var: String,
    pub primary_key: String,

    /// Only published on item pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_key_value: Option<Value>,
}

pub fn page_variables(ctx: &ExecutionContext) -> PageVariables {
    let model_class = ctx.controller.model_class();
    let controller = &ctx.controller.name;

    let primary_key_value = match ctx.scope() {
        ActionScope::Item => Some(primary_key_value(ctx).unwrap_or(Value::Null)),
        ActionScope::Collection => None,
    };

    PageVariables {
        model_class: model_class.to_string(),
        model_schema: ctx.table.columns.clone(),
        display_field: ctx.table.display_field().to_string(),
        singular_human_name: humanize(&underscore(&singularize(model_class))),
        plural_human_name: humanize(&underscore(controller)),
        singular_var: singularize(controller),
        plural_var: variable(controller),
        primary_key: ctx.table.primary_key.clone(),
        primary_key_value,
    }
}
