use std::collections::HashSet;

use indexmap::IndexMap;

use crate::config::config_tree::{ConfigTree, value_to_string_list};
use crate::field::field_model::FieldSet;

pub const DEFAULT_PRIMARY_TAB: &str = "Primary";

/// Split form fields into tabs from `scaffold.form_tab_groups`.
///
/// With no groups declared the result is empty and the renderer shows one
/// untabbed form. Otherwise every field not claimed by a declared group is
/// collected, in field order, into the primary tab (named by
/// `scaffold.form_primary_tab`) placed first. Declared groups keep their
/// order; names that are not displayed fields, and fields already claimed
/// by an earlier group, are left out so every field appears exactly once.
/// A declared group sharing the primary tab's name absorbs it.
pub fn form_tab_groups(config: &ConfigTree, fields: &FieldSet) -> IndexMap<String, Vec<String>> {
    let declared = match config.get("scaffold.form_tab_groups") {
        Some(serde_json::Value::Object(groups)) if !groups.is_empty() => groups,
        _ => return IndexMap::new(),
    };

    let mut claimed: HashSet<String> = HashSet::new();
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
    for (group, entries) in declared {
        // keyed entries contribute their keys; field options live in `scaffold.fields`
        let names = value_to_string_list(entries)
            .into_iter()
            .filter(|name| fields.contains_key(name) && claimed.insert(name.clone()))
            .collect();
        groups.insert(group.clone(), names);
    }

    let ungrouped: Vec<String> = fields
        .keys()
        .filter(|name| !claimed.contains(*name))
        .cloned()
        .collect();
    if ungrouped.is_empty() {
        return groups;
    }

    let primary = config
        .non_empty_str("scaffold.form_primary_tab")
        .unwrap_or(DEFAULT_PRIMARY_TAB)
        .to_string();

    let mut primary_fields = ungrouped;
    if let Some(existing) = groups.shift_remove(&primary) {
        primary_fields.extend(existing);
    }

    let mut ordered = IndexMap::with_capacity(groups.len() + 1);
    ordered.insert(primary, primary_fields);
    ordered.extend(groups);
    ordered
}
