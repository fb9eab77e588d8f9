use serde::Serialize;

use crate::action::action_model::ActionScope;
use crate::assembly::context::{ContextFile, Query};
use crate::assembly::listener::ScaffoldListener;
use crate::cli::config::AppConfig;
use crate::dashboard::dashboard_model::DashboardSpec;
use crate::error::ScaffoldError;

// ============================================================================
// resolve subcommand
// ============================================================================

/// Run one lifecycle phase for a context file and render the result.
///
/// `render` runs the query hook matching the action's scope, then prints
/// the view variables; `find` and `paginate` print the related models the
/// query would contain.
pub fn cmd_resolve(
    context_path: &str,
    action: Option<&str>,
    phase: &str,
    format: &str,
    config: &AppConfig,
) -> Result<String, ScaffoldError> {
    let content = read_file(context_path)?;
    let file = ContextFile::from_yaml(&content)?;
    let ctx = file.into_context(action, &config.scaffold_defaults)?;

    let mut listener = ScaffoldListener::new();
    let mut query = Query::default();

    match phase {
        "find" => {
            listener.before_find(&ctx, &mut query);
            render(&query.contain, format, config.output.pretty)
        }
        "paginate" => {
            listener.before_paginate(&ctx, &mut query);
            render(&query.contain, format, config.output.pretty)
        }
        _ => {
            match ctx.scope() {
                ActionScope::Item => listener.before_find(&ctx, &mut query),
                ActionScope::Collection => listener.before_paginate(&ctx, &mut query),
            }
            match listener.before_render(&ctx) {
                Some(vars) => render(&vars, format, config.output.pretty),
                None => Ok(String::new()),
            }
        }
    }
}

// ============================================================================
// dashboard subcommand
// ============================================================================

pub fn cmd_dashboard(path: &str, format: &str, config: &AppConfig) -> Result<String, ScaffoldError> {
    let content = read_file(path)?;
    let spec: DashboardSpec = serde_yaml::from_str(&content).map_err(|source| ScaffoldError::Yaml {
        context: format!("dashboard file '{}'", path),
        source,
    })?;
    let dashboard = spec.build()?;
    render(&dashboard, format, config.output.pretty)
}

// ============================================================================
// Helpers
// ============================================================================

fn read_file(path: &str) -> Result<String, ScaffoldError> {
    std::fs::read_to_string(path).map_err(|source| ScaffoldError::Io {
        path: path.to_string(),
        source,
    })
}

/// Serialize to JSON or YAML.
pub fn render<T: Serialize>(value: &T, format: &str, pretty: bool) -> Result<String, ScaffoldError> {
    match format {
        "json" => {
            let result = if pretty {
                serde_json::to_string_pretty(value)
            } else {
                serde_json::to_string(value)
            };
            result.map_err(|source| ScaffoldError::Json {
                context: "rendering output".to_string(),
                source,
            })
        }
        "yaml" => serde_yaml::to_string(value).map_err(|source| ScaffoldError::Yaml {
            context: "rendering output".to_string(),
            source,
        }),
        other => Err(ScaffoldError::UnknownFormat(other.to_string())),
    }
}
