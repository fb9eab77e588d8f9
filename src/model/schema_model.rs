use serde::{Deserialize, Serialize};

// ============================================================================
// Data-layer introspection, as handed to the resolvers
// ============================================================================

/// Association type that carries a join table and gets `<entities>._ids`
/// pseudo-fields on single-item forms.
pub const MANY_TO_MANY: &str = "manyToMany";

/// Association types eager-loaded when paginating a listing.
pub const PAGINATE_CONTAIN_TYPES: [&str; 2] = ["manyToOne", "oneToOne"];

/// Schema and association graph of the model an action works on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Ordered column names
    pub columns: Vec<String>,

    #[serde(default = "default_primary_key")]
    pub primary_key: String,

    /// Column used to describe a record to humans (falls back to the
    /// primary key when the model has none)
    #[serde(default)]
    pub display_field: Option<String>,

    #[serde(default)]
    pub associations: Vec<Association>,
}

fn default_primary_key() -> String {
    "id".to_string()
}

impl TableSchema {
    pub fn display_field(&self) -> &str {
        self.display_field.as_deref().unwrap_or(&self.primary_key)
    }

    /// Associations in graph order, optionally restricted to some types.
    pub fn associations_of_types<'a>(
        &'a self,
        types: &'a [&str],
    ) -> impl Iterator<Item = &'a Association> + 'a {
        self.associations
            .iter()
            .filter(move |a| types.is_empty() || types.iter().any(|t| *t == a.kind))
    }
}

/// One edge of the association graph.
///
/// `kind` is reported verbatim by the data layer (`manyToOne`, `oneToMany`,
/// `manyToMany`, ...) and used as-is for grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Association {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub foreign_key: Option<String>,

    pub property_name: String,

    /// Target class identifier, optionally plugin-prefixed (`Blog.Tags`)
    #[serde(default)]
    pub class_name: Option<String>,

    #[serde(default = "default_primary_key")]
    pub target_primary_key: String,

    #[serde(default)]
    pub target_display_field: Option<String>,
}

impl Association {
    /// Plugin prefix of the target class identifier, if any.
    pub fn plugin(&self) -> Option<String> {
        let class_name = self.class_name.as_deref()?;
        class_name
            .split_once('.')
            .map(|(plugin, _)| plugin.to_string())
    }

    pub fn target_display_field(&self) -> &str {
        self.target_display_field
            .as_deref()
            .unwrap_or(&self.target_primary_key)
    }
}

/// Naming of the controller serving the current request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerNames {
    /// Controller name, e.g. `BlogPosts`
    pub name: String,

    /// Primary model class, e.g. `BlogPosts` (defaults to the controller name)
    #[serde(default)]
    pub model_class: Option<String>,
}

impl ControllerNames {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            model_class: None,
        }
    }

    pub fn model_class(&self) -> &str {
        self.model_class.as_deref().unwrap_or(&self.name)
    }
}
