use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::config::config_tree::merge_maps;

/// What the view layer needs to know about one association.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationDescriptor {
    pub model: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub primary_key: String,
    pub display_field: String,
    pub foreign_key: Option<String>,
    pub property_name: String,
    pub plugin: Option<String>,
    pub controller: String,

    /// Singular underscored name, e.g. `blog_tag`
    pub entity: String,

    /// Plural underscored name, e.g. `blog_tags`
    pub entities: String,

    /// Keys supplied by `association.<name>` overrides that are not part
    /// of the base descriptor
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AssociationDescriptor {
    /// Apply an `association.<name>` override. Override keys win; unknown
    /// keys are kept in `extra`. A known key with a value of the wrong type
    /// is ignored.
    pub fn apply_override(&mut self, overrides: &Map<String, Value>) {
        let model = self.model.clone();
        for (key, value) in overrides {
            let slot = match key.as_str() {
                "model" => Some(&mut self.model),
                "type" => Some(&mut self.kind),
                "primaryKey" => Some(&mut self.primary_key),
                "displayField" => Some(&mut self.display_field),
                "propertyName" => Some(&mut self.property_name),
                "controller" => Some(&mut self.controller),
                "entity" => Some(&mut self.entity),
                "entities" => Some(&mut self.entities),
                _ => None,
            };

            match (slot, key.as_str()) {
                (Some(slot), _) => match value.as_str() {
                    Some(s) => *slot = s.to_string(),
                    None => warn!(model = %model, key = %key, "ignoring non-string association override"),
                },
                (None, "foreignKey") => self.foreign_key = optional_string(&model, key, value),
                (None, "plugin") => self.plugin = optional_string(&model, key, value),
                (None, _) => {
                    let mut incoming = Map::new();
                    incoming.insert(key.clone(), value.clone());
                    merge_maps(&mut self.extra, &incoming);
                }
            }
        }
    }
}

fn optional_string(model: &str, key: &str, value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null | Value::Bool(false) => None,
        _ => {
            warn!(model, key, "ignoring non-string association override");
            None
        }
    }
}

/// Association descriptors grouped by type, then by association name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Associations(pub IndexMap<String, IndexMap<String, AssociationDescriptor>>);

impl Associations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a descriptor under the association's own type and name, which
    /// an override cannot move.
    pub fn insert(&mut self, kind: &str, name: &str, descriptor: AssociationDescriptor) {
        self.0
            .entry(kind.to_string())
            .or_default()
            .insert(name.to_string(), descriptor);
    }

    /// Descriptors of one association type, in graph order.
    pub fn of_type(&self, kind: &str) -> impl Iterator<Item = &AssociationDescriptor> {
        self.0.get(kind).into_iter().flat_map(|m| m.values())
    }

    pub fn get(&self, kind: &str, name: &str) -> Option<&AssociationDescriptor> {
        self.0.get(kind)?.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(IndexMap::is_empty)
    }

    pub fn len(&self) -> usize {
        self.0.values().map(IndexMap::len).sum()
    }
}
