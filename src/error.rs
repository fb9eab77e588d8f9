use thiserror::Error;

/// Failures raised at the edges of the crate: loading context files,
/// parsing YAML/JSON, writing output, and building dashboards.
///
/// The resolvers themselves never fail. Missing or malformed scaffold
/// configuration degrades to defaults instead.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A file could not be read or written
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing or serialization failed
    #[error("YAML error ({context}): {source}")]
    Yaml {
        context: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// JSON parsing or serialization failed
    #[error("JSON error ({context}): {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The context does not name an action to render
    #[error("no current action: {0}")]
    MissingAction(String),

    /// Unsupported output format requested
    #[error("unknown output format '{0}' (expected json or yaml)")]
    UnknownFormat(String),

    #[error(transparent)]
    Dashboard(#[from] DashboardError),
}

/// Invalid-argument failures from the dashboard value objects.
///
/// Every constructor that returns one of these aborts; nothing is built
/// from a partially valid description.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Missing title for {0}")]
    MissingTitle(&'static str),

    #[error("Missing url for {0}")]
    MissingUrl(&'static str),

    #[error("Valid columns value must be one of [1, 2, 3, 4, 6, 12], got {0}")]
    InvalidColumns(u64),

    #[error("Invalid column index {0} (columns are numbered from 1)")]
    InvalidColumnIndex(usize),

    #[error("Malformed link description: {0}")]
    MalformedLink(String),
}
