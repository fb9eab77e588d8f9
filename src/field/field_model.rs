use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::config_tree::merge_maps;

/// One displayable field: its input/display options and an optional
/// formatter hint for the renderer. The field name is the key it is stored
/// under in a `FieldSet`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub options: Map<String, Value>,
    pub formatter: Option<Value>,
}

impl FieldDescriptor {
    /// Build a descriptor from a raw field config value.
    ///
    /// `null` yields no options; a map becomes the options, with its
    /// `formatter` key lifted out; any other value is wrapped as option `"0"`.
    pub fn from_value(value: &Value) -> Self {
        let mut descriptor = Self::default();
        match value {
            Value::Null => {}
            Value::Object(map) => descriptor.merge_settings(map),
            other => {
                descriptor.options.insert("0".to_string(), other.clone());
            }
        }
        descriptor
    }

    /// Deep-merge per-field settings over this descriptor. A `formatter`
    /// key replaces the formatter; everything else merges into the options.
    pub fn merge_settings(&mut self, settings: &Map<String, Value>) {
        let mut options = Map::new();
        for (key, value) in settings {
            if key == "formatter" {
                self.formatter = (!value.is_null()).then(|| value.clone());
            } else {
                options.insert(key.clone(), value.clone());
            }
        }
        merge_maps(&mut self.options, &options);
    }

    /// Whether this field stands for a many-to-many id list.
    pub fn is_multiple(&self) -> bool {
        self.options.get("multiple").and_then(Value::as_bool) == Some(true)
    }
}

/// Ordered field name → descriptor.
pub type FieldSet = IndexMap<String, FieldDescriptor>;
