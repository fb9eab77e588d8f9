use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Layered configuration tree with dotted-path lookup
// ============================================================================

/// Configuration for one action, addressed by dotted paths such as
/// `scaffold.fields` or `association.Tags`.
///
/// `get()` returns `None` for a path that was never set (or was set to
/// `null`), so callers can tell "absent" apart from an explicit `false`,
/// `[]` or `""`. Object key order is preserved from the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigTree {
    root: Value,
}

impl ConfigTree {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Build a tree by deep-merging `overlay` over `base`.
    pub fn layered(base: &ConfigTree, overlay: &ConfigTree) -> Self {
        let mut root = base.root.clone();
        deep_merge(&mut root, &overlay.root);
        Self { root }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Look up a dotted path. `null` counts as absent.
    pub fn get(&self, path: &str) -> Option<&Value> {
        lookup(&self.root, path)
    }

    pub fn has(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// True when the path is absent or holds an empty value.
    pub fn is_empty(&self, path: &str) -> bool {
        self.get(path).map(is_empty_value).unwrap_or(true)
    }

    /// Truthiness of a path (absent is false).
    pub fn is_truthy(&self, path: &str) -> bool {
        !self.is_empty(path)
    }

    /// Non-empty string at `path`, if any.
    pub fn non_empty_str(&self, path: &str) -> Option<&str> {
        match self.get(path) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Value at `path`, or `default` when the path is absent or empty.
    pub fn get_or(&self, path: &str, default: Value) -> Value {
        match self.get(path) {
            Some(v) if !is_empty_value(v) => v.clone(),
            _ => default,
        }
    }

    /// Read a path as a list of strings. A single string is cast to a
    /// one-element list; object keys are used when the value is a map.
    pub fn string_list(&self, path: &str) -> Vec<String> {
        match self.get(path) {
            Some(v) => value_to_string_list(v),
            None => Vec::new(),
        }
    }

    /// Set a dotted path, creating intermediate objects as needed.
    pub fn set(&mut self, path: &str, value: Value) {
        let segments: Vec<&str> = path.split('.').collect();
        insert_path(&mut self.root, &segments, value);
    }

    /// The tri-state `scaffold.relations` setting.
    pub fn relations(&self) -> Relations {
        match self.get("scaffold.relations") {
            Some(Value::Bool(false)) => Relations::Disabled,
            Some(v) if !is_empty_value(v) => Relations::Listed(normalize_map(v)),
            _ => Relations::Auto,
        }
    }
}

impl From<Value> for ConfigTree {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

/// How the related models of an action were configured.
#[derive(Debug, Clone, PartialEq)]
pub enum Relations {
    /// `scaffold.relations: false`, load nothing
    Disabled,
    /// Unset or empty, load every association
    Auto,
    /// Explicit list (or map of name to contain options)
    Listed(IndexMap<String, Value>),
}

// ============================================================================
// Value helpers
// ============================================================================

/// Dotted-path lookup into any JSON value. `null` counts as absent.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut node = root;
    for segment in path.split('.') {
        node = match node {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    if node.is_null() { None } else { Some(node) }
}

/// Emptiness in the loose sense scaffolding configuration relies on:
/// null, false, 0, "", "0", empty list and empty map are all empty.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Normalize a list-or-map into an ordered name → value map.
///
/// Bare names in a list map to `null`; map entries are kept as-is. Non-string
/// list items are skipped.
pub fn normalize_map(value: &Value) -> IndexMap<String, Value> {
    let mut out = IndexMap::new();
    match value {
        Value::Array(items) => {
            for item in items {
                if let Some(name) = scalar_key(item) {
                    out.insert(name, Value::Null);
                }
            }
        }
        Value::Object(map) => {
            for (key, v) in map {
                out.insert(key.clone(), v.clone());
            }
        }
        other => {
            if let Some(name) = scalar_key(other) {
                out.insert(name, Value::Null);
            }
        }
    }
    out
}

pub fn value_to_string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(scalar_key).collect(),
        Value::Object(map) => map.keys().cloned().collect(),
        other => scalar_key(other).into_iter().collect(),
    }
}

fn scalar_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Deep-merge `overlay` into `base`. Objects merge recursively with the
/// overlay winning per key; anything else in the overlay replaces.
pub fn deep_merge(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            merge_maps(base_map, overlay_map);
        }
        (_, Value::Null) => {}
        (base, overlay) => *base = overlay.clone(),
    }
}

/// Map-level `deep_merge`; `null` overlay entries leave the base untouched.
pub fn merge_maps(base: &mut Map<String, Value>, overlay: &Map<String, Value>) {
    for (key, value) in overlay {
        if value.is_null() {
            continue;
        }
        let nested = value.is_object() && base.get(key).is_some_and(Value::is_object);
        if !nested {
            base.insert(key.clone(), value.clone());
        } else if let Some(existing) = base.get_mut(key) {
            deep_merge(existing, value);
        }
    }
}

/// Render a scalar for display in titles.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Write `value` at `segments` below `node`, replacing any scalar met on
/// the way with an object.
fn insert_path(node: &mut Value, segments: &[&str], value: Value) {
    let Some((head, rest)) = segments.split_first() else {
        *node = value;
        return;
    };

    if let Value::Object(map) = node {
        let child = map.entry(head.to_string()).or_insert(Value::Null);
        insert_path(child, rest, value);
    } else {
        let mut child = Value::Null;
        insert_path(&mut child, rest, value);
        let mut map = Map::new();
        map.insert(head.to_string(), child);
        *node = Value::Object(map);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_is_absent_but_false_is_present() {
        let tree = ConfigTree::new(json!({"a": {"b": null, "c": false}}));
        assert!(!tree.has("a.b"));
        assert!(tree.has("a.c"));
        assert!(tree.is_empty("a.c"));
    }

    #[test]
    fn set_creates_intermediate_objects() {
        let mut tree = ConfigTree::default();
        tree.set("scaffold.page_title", json!("Hello"));
        assert_eq!(tree.non_empty_str("scaffold.page_title"), Some("Hello"));
    }

    #[test]
    fn set_replaces_scalar_on_the_path() {
        let mut tree = ConfigTree::new(json!({"scaffold": "flat", "other": 1}));
        tree.set("scaffold.relations.Tags", json!(true));
        assert_eq!(tree.get("scaffold"), Some(&json!({"relations": {"Tags": true}})));
        assert_eq!(tree.get("other"), Some(&json!(1)));

        tree.set("scaffold.relations", json!(false));
        assert_eq!(tree.relations(), Relations::Disabled);
    }

    #[test]
    fn overlay_nested_keys_merge() {
        let mut base = json!({"x": {"a": 1, "b": 2}});
        deep_merge(&mut base, &json!({"x": {"b": 3}}));
        assert_eq!(base, json!({"x": {"a": 1, "b": 3}}));
    }
}
