use serde_json::{Map, Value};

use crate::action::action_model::{ActionConfig, ActionScope, ResolvedAction};
use crate::config::config_tree::is_empty_value;
use crate::inflect::inflector::{humanize, underscore};
use crate::model::registry::{ActionKind, ActionRegistry};

/// Work out how to link to `name`.
///
/// The real target is `config.url.action` when set, else `name` itself. A
/// mapped delete target defaults to `DELETE`; a mapped target without an
/// explicit scope takes collection scope for add actions and the
/// implementation's own scope otherwise. Unmapped targets fall back to item
/// scope and `GET`.
pub fn resolve_action(
    name: &str,
    config: &ActionConfig,
    registry: &ActionRegistry,
) -> (ActionScope, ResolvedAction) {
    let real_action = config.url_action().unwrap_or(name).to_string();

    let mut scope = config.scope;
    let mut method = config.method.clone();

    if let Some(registered) = registry.get(&real_action) {
        if registered.kind == ActionKind::Delete && method.is_none() {
            method = Some("DELETE".to_string());
        }

        if scope.is_none() {
            scope = Some(match registered.kind {
                ActionKind::Add => ActionScope::Collection,
                _ => registered.scope(),
            });
        }
    }

    let scope = scope.unwrap_or(ActionScope::Item);
    let method = method.unwrap_or_else(|| "GET".to_string());

    let title = match config.link_title.as_deref() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => humanize(&underscore(name)),
    };

    let mut url = Map::new();
    if let Some(overrides) = &config.url {
        url.extend(overrides.clone());
    }
    url.entry("action").or_insert(Value::String(real_action));

    let callback = config
        .callback
        .as_ref()
        .filter(|cb| !is_empty_value(cb))
        .cloned();

    let resolved = ResolvedAction {
        title,
        url,
        method,
        options: config.extra.clone(),
        callback,
    };

    (scope, resolved)
}
