use std::collections::HashSet;

use indexmap::IndexMap;
use serde_json::{Value, json};
use tracing::{debug, trace, warn};

use crate::action::action_model::ActionScope;
use crate::association::association_model::Associations;
use crate::config::config_tree::{ConfigTree, normalize_map};
use crate::field::field_model::{FieldDescriptor, FieldSet};
use crate::model::schema_model::{MANY_TO_MANY, TableSchema};

/// Fields to display for the current action.
///
/// Explicit `scaffold.fields` win. When there are none, or
/// `scaffold.autoFields` is set, every schema column is used with the
/// explicit entries overlaid in place; on single-item views each
/// many-to-many association adds an `<entities>._ids` field. Then
/// `scaffold.fields_blacklist` is applied and `scaffold.field_settings` is
/// deep-merged over the surviving fields.
pub fn resolve_fields(
    config: &ConfigTree,
    scope: ActionScope,
    table: &TableSchema,
    associations: &Associations,
) -> FieldSet {
    let explicit = config
        .get("scaffold.fields")
        .map(normalize_map)
        .unwrap_or_default();

    let mut raw: IndexMap<String, Value> = if explicit.is_empty() || config.is_truthy("scaffold.autoFields") {
        let mut columns: IndexMap<String, Value> = table
            .columns
            .iter()
            .map(|c| (c.clone(), Value::Null))
            .collect();

        if scope == ActionScope::Item {
            for descriptor in associations.of_type(MANY_TO_MANY) {
                let name = format!("{}._ids", descriptor.entities);
                trace!(field = %name, "adding many-to-many id field");
                columns.insert(name, json!({ "multiple": true }));
            }
        }

        for (name, options) in explicit {
            columns.insert(name, options);
        }
        columns
    } else {
        explicit
    };

    let blacklist: HashSet<String> = fields_blacklist(config).into_iter().collect();
    raw.retain(|name, _| !blacklist.contains(name));

    let mut fields: FieldSet = raw
        .iter()
        .map(|(name, value)| (name.clone(), FieldDescriptor::from_value(value)))
        .collect();

    if let Some(settings) = config.get("scaffold.field_settings") {
        apply_field_settings(&mut fields, settings);
    }

    debug!(count = fields.len(), "fields resolved");
    fields
}

/// `scaffold.fields_blacklist` as a list (a single name is accepted).
pub fn fields_blacklist(config: &ConfigTree) -> Vec<String> {
    config.string_list("scaffold.fields_blacklist")
}

/// Merge per-field settings, ignoring settings for fields that are not
/// displayed.
fn apply_field_settings(fields: &mut FieldSet, settings: &Value) {
    let Value::Object(settings) = settings else {
        return;
    };

    for (name, setting) in settings {
        let Some(field) = fields.get_mut(name) else {
            continue;
        };
        match setting {
            Value::Object(map) => field.merge_settings(map),
            Value::Null => {}
            _ => warn!(field = %name, "field_settings entry is not a map, ignored"),
        }
    }
}
