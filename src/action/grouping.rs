use std::collections::HashSet;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, trace};

use crate::action::action_model::{
    ActionConfig, ActionGroup, ActionMap, ControllerActions, ResolvedAction,
};
use crate::action::resolver::resolve_action;
use crate::config::config_tree::{ConfigTree, normalize_map};
use crate::model::registry::ActionRegistry;

/// Name of the implicit group holding every ungrouped action.
pub const PRIMARY_GROUP: &str = "primary";

// ============================================================================
// Declared groups
// ============================================================================

/// Read `scaffold.action_groups`. A map names its groups; a list gets
/// positional names (`"0"`, `"1"`, ...).
pub fn declared_action_groups(config: &ConfigTree) -> Vec<ActionGroup> {
    let Some(groups) = config.get("scaffold.action_groups") else {
        return Vec::new();
    };

    let named: Vec<(String, &Value)> = match groups {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => Vec::new(),
    };

    named
        .into_iter()
        .map(|(name, group)| ActionGroup {
            name,
            entries: normalize_map(group)
                .into_iter()
                .map(|(action, config)| {
                    let config = (!config.is_null()).then(|| ActionConfig::from_value(&config));
                    (action, config)
                })
                .collect(),
        })
        .collect()
}

// ============================================================================
// Bucketing with group aliases
// ============================================================================

/// Resolve every allowed action into its scope bucket, then apply group
/// aliases.
///
/// A group entry not already present in either bucket is resolved with its
/// own config. When its real target (`url.action`, or the entry itself)
/// sits in the bucket of the entry's scope, the alias is added under the
/// entry name and the target is dropped. Entries pointing at unknown or
/// filtered actions are ignored.
pub fn controller_actions(
    allowed: &ActionMap,
    groups: &[ActionGroup],
    registry: &ActionRegistry,
) -> ControllerActions {
    let mut base = ControllerActions::default();
    for (name, config) in allowed {
        let (scope, resolved) = resolve_action(name, config, registry);
        base.bucket_mut(scope).insert(name.clone(), resolved);
    }

    let mut aliases = ControllerActions::default();
    let mut removed: HashSet<String> = HashSet::new();

    let empty = ActionConfig::default();
    for group in groups {
        for (alias, config) in &group.entries {
            if base.contains(alias) || aliases.contains(alias) {
                continue;
            }

            let config = config.as_ref().unwrap_or(&empty);
            let (scope, resolved) = resolve_action(alias, config, registry);
            let target = config.url_action().unwrap_or(alias);

            let target_present = base.bucket(scope).contains_key(target)
                || aliases.bucket(scope).contains_key(target);
            if !target_present {
                debug!(group = %group.name, alias = %alias, real = target, "group entry has no target, dropped");
                continue;
            }

            trace!(group = %group.name, alias = %alias, real = target, "group alias replaces target");
            removed.insert(target.to_string());
            aliases.bucket_mut(scope).insert(alias.clone(), resolved);
        }
    }

    ControllerActions {
        table: merge_bucket(base.table, aliases.table, &removed),
        entity: merge_bucket(base.entity, aliases.entity, &removed),
    }
}

fn merge_bucket(
    base: IndexMap<String, ResolvedAction>,
    aliases: IndexMap<String, ResolvedAction>,
    removed: &HashSet<String>,
) -> IndexMap<String, ResolvedAction> {
    base.into_iter()
        .chain(aliases)
        .filter(|(name, _)| !removed.contains(name))
        .collect()
}

// ============================================================================
// Published groups
// ============================================================================

/// Group name → action names, with the implicit `primary` group of every
/// allowed action not named by a declared group appended last.
///
/// Entry config is not repeated here: aliases are already realized in
/// `controller_actions`, and a template looks each name up there. Names
/// that did not resolve are simply absent from the action buckets.
pub fn action_groups(allowed: &ActionMap, groups: &[ActionGroup]) -> IndexMap<String, Vec<String>> {
    let grouped: HashSet<&str> = groups
        .iter()
        .flat_map(|g| g.entries.keys().map(String::as_str))
        .collect();

    let mut published: IndexMap<String, Vec<String>> = groups
        .iter()
        .map(|g| (g.name.clone(), g.entries.keys().cloned().collect()))
        .collect();

    let primary = allowed
        .keys()
        .filter(|name| !grouped.contains(name.as_str()))
        .cloned()
        .collect();
    published.insert(PRIMARY_GROUP.to_string(), primary);

    published
}
