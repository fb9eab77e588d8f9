use serde_json::Map;
use tracing::{debug, trace};

use crate::association::association_model::{AssociationDescriptor, Associations};
use crate::config::config_tree::ConfigTree;
use crate::inflect::inflector::{singularize, underscore};
use crate::model::schema_model::{Association, TableSchema};

/// Describe the model's associations for the view layer.
///
/// `whitelist` restricts the result to the named associations (matched
/// case-insensitively); an empty whitelist keeps all of them. Each
/// descriptor is overlaid with `association.<name>` from `config`.
pub fn resolve_associations(
    table: &TableSchema,
    config: &ConfigTree,
    whitelist: &[String],
) -> Associations {
    let mut resolved = Associations::new();

    for association in &table.associations {
        let listed = whitelist.is_empty()
            || whitelist
                .iter()
                .any(|name| name.eq_ignore_ascii_case(&association.name));
        if !listed {
            continue;
        }

        let mut descriptor = describe(association);
        let override_path = format!("association.{}", association.name);
        if let Some(overrides) = config.get(&override_path).and_then(|v| v.as_object()) {
            trace!(association = %association.name, keys = overrides.len(), "applying association override");
            descriptor.apply_override(overrides);
        }

        resolved.insert(&association.kind, &association.name, descriptor);
    }

    debug!(count = resolved.len(), "associations resolved");
    resolved
}

/// Base descriptor of one association, before overrides.
pub fn describe(association: &Association) -> AssociationDescriptor {
    let name = &association.name;
    AssociationDescriptor {
        model: name.clone(),
        kind: association.kind.clone(),
        primary_key: association.target_primary_key.clone(),
        display_field: association.target_display_field().to_string(),
        foreign_key: association.foreign_key.clone(),
        property_name: association.property_name.clone(),
        plugin: association.plugin(),
        controller: name.clone(),
        entity: singularize(&underscore(name)),
        entities: underscore(name),
        extra: Map::new(),
    }
}
