#![allow(dead_code)]

use crud_scaffold::assembly::context::ExecutionContext;
use crud_scaffold::config::config_tree::ConfigTree;
use crud_scaffold::model::registry::{ActionKind, ActionRegistry};
use crud_scaffold::model::schema_model::{Association, ControllerNames, TableSchema};
use serde_json::{Map, Value};

// =========================================================================
// Fixture builders shared by the integration tests
// =========================================================================

pub fn association(name: &str, kind: &str, property: &str) -> Association {
    Association {
        name: name.into(),
        kind: kind.into(),
        foreign_key: Some("blog_post_id".into()),
        property_name: property.into(),
        class_name: Some(name.into()),
        target_primary_key: "id".into(),
        target_display_field: Some("name".into()),
    }
}

/// BlogPosts: belongs to Authors, has many Comments, many-to-many Tags.
pub fn blog_posts_table() -> TableSchema {
    let mut authors = association("Authors", "manyToOne", "author");
    authors.foreign_key = Some("author_id".into());

    let mut tags = association("Tags", "manyToMany", "tags");
    tags.class_name = Some("Blog.Tags".into());
    tags.target_display_field = Some("title".into());

    TableSchema {
        columns: vec![
            "id".into(),
            "title".into(),
            "body".into(),
            "author_id".into(),
            "created".into(),
        ],
        primary_key: "id".into(),
        display_field: Some("title".into()),
        associations: vec![
            authors,
            association("Comments", "oneToMany", "comments"),
            tags,
        ],
    }
}

pub fn crud_registry() -> ActionRegistry {
    ActionRegistry::new()
        .with("index", ActionKind::Index)
        .with("add", ActionKind::Add)
        .with("view", ActionKind::View)
        .with("edit", ActionKind::Edit)
        .with("delete", ActionKind::Delete)
        .with("lookup", ActionKind::Lookup)
}

pub fn context(action: &str, config: Value) -> ExecutionContext {
    ExecutionContext::new(
        ControllerNames::new("BlogPosts"),
        action,
        ConfigTree::new(config),
        blog_posts_table(),
        crud_registry(),
    )
}

pub fn entity(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("entity fixture must be an object"),
    }
}

pub fn fixture_path(name: &str) -> String {
    let base = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    base.join("tests")
        .join("fixtures")
        .join(name)
        .display()
        .to_string()
}
