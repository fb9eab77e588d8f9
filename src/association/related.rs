use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::config::config_tree::{ConfigTree, Relations, normalize_map};
use crate::model::schema_model::TableSchema;

/// Related models to eager-load: association name → contain options.
pub type RelatedModels = IndexMap<String, Map<String, Value>>;

/// Work out which associations an action loads.
///
/// `scaffold.relations: false` loads nothing. Unset or empty loads every
/// association, or only those of `types` when given. An explicit list or
/// map is used as-is. Names in `scaffold.relations_blacklist` are then
/// dropped, and option values that are not maps become empty maps.
pub fn related_models(table: &TableSchema, config: &ConfigTree, types: &[&str]) -> RelatedModels {
    let models: IndexMap<String, Value> = match config.relations() {
        Relations::Disabled => return RelatedModels::new(),
        Relations::Auto => table
            .associations_of_types(types)
            .map(|a| (a.name.clone(), Value::Null))
            .collect(),
        Relations::Listed(models) => models,
    };

    let blacklist = config
        .get("scaffold.relations_blacklist")
        .map(normalize_map)
        .unwrap_or_default();

    models
        .into_iter()
        .filter(|(name, _)| !blacklist.contains_key(name))
        .map(|(name, options)| {
            let options = match options {
                Value::Object(map) => map,
                _ => Map::new(),
            };
            (name, options)
        })
        .collect()
}
