mod common;

use clap::Parser;
use crud_scaffold::cli::commands::{cmd_dashboard, cmd_resolve, render};
use crud_scaffold::cli::config::{AppConfig, Cli, Commands, load_config, resolve_format};
use crud_scaffold::error::ScaffoldError;
use serde_json::{Value, json};

use common::fixture_path;

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_resolve_minimal() {
    let cli = Cli::parse_from(["crud-scaffold", "resolve", "--context", "ctx.yaml"]);
    match cli.command {
        Commands::Resolve {
            context,
            action,
            phase,
            format,
        } => {
            assert_eq!(context, "ctx.yaml");
            assert_eq!(action, None);
            assert_eq!(phase, "render");
            assert_eq!(format, None);
        }
        _ => panic!("Expected Resolve command"),
    }
    assert_eq!(cli.verbose, 0);
    assert_eq!(cli.config, None);
}

#[test]
fn cli_parse_resolve_all_args() {
    let cli = Cli::parse_from([
        "crud-scaffold",
        "resolve",
        "--context",
        "ctx.yaml",
        "--action",
        "edit",
        "--phase",
        "find",
        "--format",
        "yaml",
        "-vv",
        "--config",
        "custom.yaml",
    ]);
    match cli.command {
        Commands::Resolve {
            context,
            action,
            phase,
            format,
        } => {
            assert_eq!(context, "ctx.yaml");
            assert_eq!(action.as_deref(), Some("edit"));
            assert_eq!(phase, "find");
            assert_eq!(format.as_deref(), Some("yaml"));
        }
        _ => panic!("Expected Resolve command"),
    }
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config.as_deref(), Some("custom.yaml"));
}

#[test]
fn cli_parse_dashboard() {
    let cli = Cli::parse_from(["crud-scaffold", "dashboard", "--file", "dash.yaml"]);
    match cli.command {
        Commands::Dashboard { file, format } => {
            assert_eq!(file, "dash.yaml");
            assert_eq!(format, None);
        }
        _ => panic!("Expected Dashboard command"),
    }
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["crud-scaffold"]).is_err());
}

// ============================================================================
// Config File Tests
// ============================================================================

#[test]
fn load_config_missing_file_uses_defaults() {
    let config = load_config(Some("/nonexistent/crud-scaffold.yaml"));
    assert_eq!(config.output.format, "json");
    assert!(config.output.pretty);
    assert!(!config.scaffold_defaults.has("scaffold"));
}

#[test]
fn load_config_reads_file() {
    let config = load_config(Some(&fixture_path("config.yaml")));
    assert_eq!(config.output.format, "yaml");
    assert!(!config.output.pretty);
    assert!(config.scaffold_defaults.has("scaffold.breadcrumbs"));
}

#[test]
fn load_config_malformed_file_uses_defaults() {
    let config = load_config(Some(&fixture_path("malformed_config.yaml")));
    assert_eq!(config.output.format, "json");
}

#[test]
fn format_flag_wins_over_config() {
    let config = AppConfig::default();
    assert_eq!(resolve_format(None, &config), "json");
    assert_eq!(resolve_format(Some("yaml"), &config), "yaml");
}

// ============================================================================
// Command Tests
// ============================================================================

fn compact() -> AppConfig {
    let mut config = AppConfig::default();
    config.output.pretty = false;
    config
}

fn resolve_json(action: Option<&str>, phase: &str, config: &AppConfig) -> Value {
    let output = cmd_resolve(&fixture_path("blog_posts.yaml"), action, phase, "json", config).unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn resolve_render_default_action() {
    let vars = resolve_json(None, "render", &compact());

    assert_eq!(vars["title"], json!("Edit Blog Post #3: Hello"));
    assert_eq!(vars["primaryKeyValue"], json!(3));
    assert!(vars["fields"].get("created").is_none());
    assert_eq!(vars["fields"]["tags._ids"]["options"]["multiple"], json!(true));
    assert_eq!(vars["formTabGroups"]["Primary"], json!(["id", "author_id", "tags._ids"]));
    assert_eq!(vars["formTabGroups"]["Content"], json!(["title", "body"]));
    assert_eq!(vars["blacklist"], json!(["created"]));
    assert!(vars["actions"]["table"].get("lookup").is_none());
}

#[test]
fn resolve_render_named_action() {
    let vars = resolve_json(Some("index"), "render", &compact());

    assert_eq!(vars["title"], json!("Blog Posts"));
    let fields: Vec<&String> = vars["fields"].as_object().unwrap().keys().collect();
    assert_eq!(fields, vec!["title", "author_id", "created"]);
    assert!(vars.get("primaryKeyValue").is_none());
}

#[test]
fn resolve_find_and_paginate_phases() {
    let find = resolve_json(Some("view"), "find", &compact());
    let names: Vec<&String> = find.as_object().unwrap().keys().collect();
    assert_eq!(names, vec!["Authors", "Comments", "Tags"]);

    let paginate = resolve_json(Some("index"), "paginate", &compact());
    assert_eq!(paginate, json!({ "Authors": {} }));
}

#[test]
fn resolve_layers_scaffold_defaults() {
    let mut config = compact();
    config.scaffold_defaults = load_config(Some(&fixture_path("config.yaml"))).scaffold_defaults;

    let vars = resolve_json(Some("index"), "render", &config);
    assert_eq!(vars["breadcrumbs"], json!([{ "title": "Home", "url": "/" }]));
}

#[test]
fn resolve_missing_file_is_io_error() {
    let err = cmd_resolve("/nonexistent/ctx.yaml", None, "render", "json", &compact()).unwrap_err();
    assert!(matches!(err, ScaffoldError::Io { .. }));
}

#[test]
fn dashboard_command_renders_yaml() {
    let output = cmd_dashboard(&fixture_path("dashboard.yaml"), "yaml", &compact()).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();

    assert_eq!(value["title"].as_str(), Some("Admin"));
    assert_eq!(value["column_class"].as_str(), Some("col-md-4"));
}

#[test]
fn dashboard_command_renders_json() {
    let output = cmd_dashboard(&fixture_path("dashboard.yaml"), "json", &compact()).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["children"]["2"][0]["module"], json!("action_link"));
    assert_eq!(value["children"]["3"][0]["options"]["target"], json!("_blank"));
    assert_eq!(
        value["children"]["1"][0]["links"][0]["actions"][0]["options"]["class"],
        json!(["btn btn-default"])
    );
}

#[test]
fn render_rejects_unknown_format() {
    let err = render(&json!({}), "xml", true).unwrap_err();
    assert!(matches!(err, ScaffoldError::UnknownFormat(ref f) if f == "xml"));
}

#[test]
fn render_pretty_and_compact_json() {
    let value = json!({ "a": 1 });
    assert_eq!(render(&value, "json", false).unwrap(), r#"{"a":1}"#);
    assert!(render(&value, "json", true).unwrap().contains('\n'));
}
