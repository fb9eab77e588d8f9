use crud_scaffold::dashboard::action_link_item::{ActionLinkItem, DEFAULT_ACTION_CLASS};
use crud_scaffold::dashboard::dashboard_model::{
    DEFAULT_DASHBOARD_TITLE, Dashboard, DashboardModule, DashboardSpec, LinkEntry, LinkTableModule,
};
use crud_scaffold::dashboard::link_item::{LinkItem, LinkUrl};
use crud_scaffold::error::DashboardError;
use serde_json::{Map, Value, json};

fn link(title: &str, url: &str) -> LinkItem {
    LinkItem::new(title, Some(url.into()), Map::new()).unwrap()
}

// =========================================================================
// Dashboard
// =========================================================================

#[test]
fn column_count_sets_grid_class() {
    for (columns, class) in [(1, "col-md-12"), (2, "col-md-6"), (3, "col-md-4"), (4, "col-md-3"), (6, "col-md-2"), (12, "col-md-1")] {
        let dashboard = Dashboard::new(None, columns).unwrap();
        assert_eq!(dashboard.column_class(), class);
        assert_eq!(dashboard.columns(), columns);
    }
}

#[test]
fn invalid_column_count_rejected() {
    assert_eq!(
        Dashboard::new(Some("Admin"), 5).unwrap_err(),
        DashboardError::InvalidColumns(5)
    );
    assert_eq!(
        Dashboard::new(None, 0).unwrap_err(),
        DashboardError::InvalidColumns(0)
    );
}

#[test]
fn failed_set_columns_keeps_previous_layout() {
    let mut dashboard = Dashboard::new(None, 3).unwrap();
    assert!(dashboard.set_columns(7).is_err());
    assert_eq!(dashboard.columns(), 3);
    assert_eq!(dashboard.column_class(), "col-md-4");
}

#[test]
fn default_title() {
    let dashboard = Dashboard::new(None, 1).unwrap();
    assert_eq!(dashboard.title(), DEFAULT_DASHBOARD_TITLE);
}

#[test]
fn modules_are_placed_in_columns() {
    let mut dashboard = Dashboard::new(None, 2).unwrap();
    dashboard
        .add_to_column(DashboardModule::Link(link("Posts", "/posts")), 2)
        .unwrap();

    assert!(dashboard.column_children(1).is_empty());
    assert_eq!(dashboard.column_children(2).len(), 1);
    assert_eq!(dashboard.column_children(2)[0].template(), "LinkItem");

    let err = dashboard
        .add_to_column(DashboardModule::Link(link("Posts", "/posts")), 0)
        .unwrap_err();
    assert_eq!(err, DashboardError::InvalidColumnIndex(0));
}

// =========================================================================
// Links
// =========================================================================

#[test]
fn link_requires_title_and_url() {
    assert_eq!(
        LinkItem::new("", Some("/x".into()), Map::new()).unwrap_err(),
        DashboardError::MissingTitle("LinkItem")
    );
    assert_eq!(
        LinkItem::new("Posts", None, Map::new()).unwrap_err(),
        DashboardError::MissingUrl("LinkItem")
    );
    assert_eq!(
        LinkItem::new("Posts", Some("".into()), Map::new()).unwrap_err(),
        DashboardError::MissingUrl("LinkItem")
    );
}

#[test]
fn error_messages_name_the_type() {
    assert_eq!(
        DashboardError::MissingTitle("LinkItem").to_string(),
        "Missing title for LinkItem"
    );
    assert_eq!(
        DashboardError::InvalidColumns(5).to_string(),
        "Valid columns value must be one of [1, 2, 3, 4, 6, 12], got 5"
    );
}

#[test]
fn external_links_open_in_new_window() {
    let external = link("Docs", "https://example.com/docs");
    assert_eq!(external.options()["target"], json!("_blank"));

    let internal = link("Posts", "/posts");
    assert!(internal.options().get("target").is_none());

    let mut options = Map::new();
    options.insert("target".into(), json!("_self"));
    let explicit = LinkItem::new("Docs", Some("http://example.com".into()), options).unwrap();
    assert_eq!(explicit.options()["target"], json!("_self"));
}

#[test]
fn route_urls_are_accepted() {
    let item = LinkItem::from_value(&json!({
        "title": "Posts",
        "url": { "controller": "BlogPosts", "action": "index" }
    }))
    .unwrap();

    assert!(matches!(item.url(), LinkUrl::Route(route) if route["controller"] == json!("BlogPosts")));
    assert!(item.options().is_empty());
}

#[test]
fn malformed_description_rejected() {
    let err = LinkItem::from_value(&json!({ "title": 5, "url": "/x" })).unwrap_err();
    assert!(matches!(err, DashboardError::MalformedLink(_)));
}

#[test]
fn action_buttons_get_default_class() {
    let item = ActionLinkItem::from_value(&json!({
        "title": "Posts",
        "url": "/posts",
        "actions": [
            { "title": "Add", "url": "/posts/add" },
            { "title": "Export", "url": "/posts/export", "options": { "class": ["btn-primary"] } }
        ]
    }))
    .unwrap();

    assert_eq!(item.link().title(), "Posts");
    assert_eq!(item.actions().len(), 2);
    assert_eq!(item.actions()[0].options()["class"], json!([DEFAULT_ACTION_CLASS]));
    assert_eq!(item.actions()[1].options()["class"], json!(["btn-primary"]));
}

#[test]
fn action_link_serializes_flat() {
    let item = ActionLinkItem::new("Posts", Some("/posts".into()), Map::new(), vec![link("Add", "/add")]).unwrap();
    let value = serde_json::to_value(&item).unwrap();

    assert_eq!(value["title"], json!("Posts"));
    assert_eq!(value["url"], json!("/posts"));
    assert_eq!(value["actions"][0]["title"], json!("Add"));
}

// =========================================================================
// Link tables
// =========================================================================

#[test]
fn link_table_picks_entry_types() {
    let links: Vec<Value> = vec![
        json!({ "title": "Posts", "url": "/posts" }),
        json!({ "title": "Tags", "url": "/tags", "actions": [{ "title": "Add", "url": "/tags/add" }] }),
    ];
    let table = LinkTableModule::new("Blog", &links).unwrap();

    assert_eq!(table.title(), "Blog");
    assert!(matches!(table.links()[0], LinkEntry::Link(_)));
    assert!(matches!(table.links()[1], LinkEntry::ActionLink(_)));
}

#[test]
fn link_table_requires_title() {
    assert_eq!(
        LinkTableModule::new("", &[]).unwrap_err(),
        DashboardError::MissingTitle("LinkTableModule")
    );
}

#[test]
fn link_table_aborts_on_first_bad_link() {
    let links = vec![json!({ "title": "Posts", "url": "/posts" }), json!({ "title": "No url" })];
    assert_eq!(
        LinkTableModule::new("Blog", &links).unwrap_err(),
        DashboardError::MissingUrl("LinkItem")
    );
}

// =========================================================================
// Dashboard files
// =========================================================================

const DASHBOARD_YAML: &str = r#"
title: Admin
columns: 2
modules:
  - type: link_table
    title: Blog
    links:
      - { title: Posts, url: /posts }
  - type: link
    column: 2
    title: Docs
    url: https://example.com/docs
"#;

#[test]
fn dashboard_file_builds() {
    let spec: DashboardSpec = serde_yaml::from_str(DASHBOARD_YAML).unwrap();
    let dashboard = spec.build().unwrap();

    assert_eq!(dashboard.title(), "Admin");
    assert_eq!(dashboard.column_class(), "col-md-6");
    assert_eq!(dashboard.column_children(1)[0].template(), "LinkTable");
    assert_eq!(dashboard.column_children(2)[0].template(), "LinkItem");

    let value = serde_json::to_value(&dashboard).unwrap();
    assert_eq!(value["children"]["2"][0]["module"], json!("link"));
    assert_eq!(value["children"]["2"][0]["options"]["target"], json!("_blank"));
}

#[test]
fn dashboard_file_with_bad_columns_fails() {
    let spec: DashboardSpec = serde_yaml::from_str("columns: 5\n").unwrap();
    assert_eq!(spec.build().unwrap_err(), DashboardError::InvalidColumns(5));
}
