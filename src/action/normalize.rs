use serde_json::Value;

use crate::action::action_model::{ActionConfig, ActionMap};

/// Convert mixed action config shapes to name → config.
///
/// Accepts a list of bare names, a map of name → config, or a mix of both
/// (a map whose entry is a bare string names an action without config).
/// Missing or non-object configs become the empty configuration.
pub fn normalize_actions(actions: &Value) -> ActionMap {
    let mut normalized = ActionMap::new();

    match actions {
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::String(name) => {
                        normalized.insert(name.clone(), ActionConfig::default());
                    }
                    Value::Object(map) => {
                        for (name, config) in map {
                            normalized.insert(name.clone(), ActionConfig::from_value(config));
                        }
                    }
                    _ => {}
                }
            }
        }
        Value::Object(map) => {
            for (key, config) in map {
                match config {
                    Value::Object(_) => {
                        normalized.insert(key.clone(), ActionConfig::from_value(config));
                    }
                    Value::String(name) => {
                        normalized.insert(name.clone(), ActionConfig::default());
                    }
                    _ => {
                        normalized.insert(key.clone(), ActionConfig::default());
                    }
                }
            }
        }
        Value::String(name) => {
            normalized.insert(name.clone(), ActionConfig::default());
        }
        _ => {}
    }

    normalized
}
