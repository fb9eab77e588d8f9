use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Action configuration and resolved link metadata
// ============================================================================

/// Whether an action operates on the whole collection or on one record.
///
/// Serialized as `table` / `entity`, the bucket names the view layer uses.
/// `collection` and `item` are accepted as aliases when reading config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionScope {
    #[serde(rename = "table", alias = "collection")]
    Collection,
    #[serde(rename = "entity", alias = "item")]
    Item,
}

impl ActionScope {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "table" | "collection" => Some(ActionScope::Collection),
            "entity" | "item" => Some(ActionScope::Item),
            _ => None,
        }
    }
}

/// Raw configuration of one action, split into the keys the resolver
/// understands and everything else.
///
/// `method`, `scope`, `link_title`, `url`, `scaffold` and `callback` are
/// reserved; every other key lands in `extra` and becomes a link option.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActionConfig {
    pub scope: Option<ActionScope>,
    pub method: Option<String>,
    pub link_title: Option<String>,

    /// Partial route merged over `{action: <real action>}`
    pub url: Option<Map<String, Value>>,

    pub callback: Option<Value>,

    /// Extra attributes passed through as link options
    pub extra: Map<String, Value>,
}

impl ActionConfig {
    /// Read a config value. Anything other than an object yields the
    /// empty configuration.
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };

        let mut config = Self::default();
        for (key, v) in map {
            match key.as_str() {
                "scope" => config.scope = v.as_str().and_then(ActionScope::parse),
                "method" => config.method = v.as_str().map(str::to_string),
                "link_title" => config.link_title = v.as_str().map(str::to_string),
                "url" => config.url = v.as_object().cloned(),
                "callback" => config.callback = (!v.is_null()).then(|| v.clone()),
                "scaffold" => {}
                _ => {
                    config.extra.insert(key.clone(), v.clone());
                }
            }
        }
        config
    }

    /// `url.action` when the config aliases another action.
    pub fn url_action(&self) -> Option<&str> {
        self.url.as_ref()?.get("action")?.as_str()
    }
}

/// Link metadata for one action, ready for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAction {
    pub title: String,

    /// Route descriptor; always carries an `action` key
    pub url: Map<String, Value>,

    pub method: String,

    pub options: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback: Option<Value>,
}

impl ResolvedAction {
    pub fn target(&self) -> Option<&str> {
        self.url.get("action").and_then(Value::as_str)
    }
}

/// Normalized actions keyed by name, in first-seen order.
pub type ActionMap = IndexMap<String, ActionConfig>;

/// A declared action group: ordered entries of name → optional config.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionGroup {
    pub name: String,
    pub entries: IndexMap<String, Option<ActionConfig>>,
}

/// Resolved actions split into the collection (`table`) and single-item
/// (`entity`) buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ControllerActions {
    pub table: IndexMap<String, ResolvedAction>,
    pub entity: IndexMap<String, ResolvedAction>,
}

impl ControllerActions {
    pub fn bucket(&self, scope: ActionScope) -> &IndexMap<String, ResolvedAction> {
        match scope {
            ActionScope::Collection => &self.table,
            ActionScope::Item => &self.entity,
        }
    }

    pub fn bucket_mut(&mut self, scope: ActionScope) -> &mut IndexMap<String, ResolvedAction> {
        match scope {
            ActionScope::Collection => &mut self.table,
            ActionScope::Item => &mut self.entity,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name) || self.entity.contains_key(name)
    }

    /// Every action name across both buckets.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().chain(self.entity.keys()).map(String::as_str)
    }
}
