use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::config::config_tree::ConfigTree;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "crud-scaffold",
    version,
    about = "Resolve CRUD scaffolding metadata from schema and configuration"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: crud-scaffold.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the view variables of one action from a context file
    Resolve {
        /// Path to the context YAML file
        #[arg(long)]
        context: String,

        /// Action to resolve (default: the file's `action`)
        #[arg(long)]
        action: Option<String>,

        /// Lifecycle hook to run: render, find, or paginate
        #[arg(long, default_value = "render")]
        phase: String,

        /// Output format: json or yaml (default from config file)
        #[arg(long)]
        format: Option<String>,
    },

    /// Validate a dashboard description and print it
    Dashboard {
        /// Path to the dashboard YAML file
        #[arg(long)]
        file: String,

        /// Output format: json or yaml (default from config file)
        #[arg(long)]
        format: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `crud-scaffold.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputConfig,

    /// Configuration layered under every action's own configuration
    #[serde(default)]
    pub scaffold_defaults: ConfigTree,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_json")]
    pub format: String,

    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            pretty: true,
        }
    }
}

// Serde default helpers
fn default_json() -> String { "json".to_string() }
fn default_true() -> bool { true }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("crud-scaffold.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = config_path, error = %e, "malformed config file, using defaults");
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

/// Output format: CLI flag, else config file.
pub fn resolve_format(flag: Option<&str>, config: &AppConfig) -> String {
    flag.unwrap_or(&config.output.format).to_string()
}
