use std::collections::HashSet;

use serde_json::Value;
use tracing::{debug, trace};

use crate::action::action_model::ActionMap;
use crate::action::normalize::normalize_actions;
use crate::config::config_tree::ConfigTree;
use crate::model::registry::ActionRegistry;

/// Actions the current view may link to.
///
/// `scaffold.actions` (every registered action when unset) and
/// `scaffold.extra_actions` are normalized and merged; extra entries with
/// the same name replace the config but keep the original position. Names
/// in `scaffold.actions_blacklist` are removed, and so is every action
/// backed by the lookup helper kind, blacklisted or not.
pub fn allowed_actions(config: &ConfigTree, registry: &ActionRegistry) -> ActionMap {
    let configured = match config.get("scaffold.actions") {
        Some(actions) => actions.clone(),
        None => Value::from(registry.names().collect::<Vec<_>>()),
    };
    let extra = config.get_or("scaffold.extra_actions", Value::Array(vec![]));

    let mut all = normalize_actions(&configured);
    for (name, action_config) in normalize_actions(&extra) {
        all.insert(name, action_config);
    }

    let mut blacklist: HashSet<String> = config
        .string_list("scaffold.actions_blacklist")
        .into_iter()
        .collect();
    blacklist.extend(registry.lookup_actions().map(str::to_string));

    all.retain(|name, _| {
        let keep = !blacklist.contains(name);
        if !keep {
            trace!(action = %name, "action blacklisted");
        }
        keep
    });

    debug!(count = all.len(), "allowed actions resolved");
    all
}

/// Names of the allowed actions, in order.
pub fn allowed_action_names(config: &ConfigTree, registry: &ActionRegistry) -> Vec<String> {
    allowed_actions(config, registry).into_keys().collect()
}
