use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::action::action_model::ActionScope;
use crate::association::related::RelatedModels;
use crate::config::config_tree::ConfigTree;
use crate::error::ScaffoldError;
use crate::model::registry::ActionRegistry;
use crate::model::schema_model::{ControllerNames, TableSchema};

// ============================================================================
// Execution context of one render cycle
// ============================================================================

/// Everything the resolvers read for one request: the current action and
/// its configuration, the model's schema and association graph, the
/// action registry, and the record being shown or edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionContext {
    pub controller: ControllerNames,

    /// Name of the action being rendered
    pub action: String,

    /// Configuration of the current action
    #[serde(default)]
    pub config: ConfigTree,

    pub table: TableSchema,

    #[serde(default)]
    pub registry: ActionRegistry,

    /// Field values of the current record, if any
    #[serde(default)]
    pub entity: Option<Map<String, Value>>,

    /// Submitted form data
    #[serde(default)]
    pub request_data: Map<String, Value>,
}

impl ExecutionContext {
    pub fn new(
        controller: ControllerNames,
        action: &str,
        config: ConfigTree,
        table: TableSchema,
        registry: ActionRegistry,
    ) -> Self {
        Self {
            controller,
            action: action.to_string(),
            config,
            table,
            registry,
            entity: None,
            request_data: Map::new(),
        }
    }

    pub fn with_entity(mut self, entity: Map<String, Value>) -> Self {
        self.entity = Some(entity);
        self
    }

    pub fn with_request_data(mut self, data: Map<String, Value>) -> Self {
        self.request_data = data;
        self
    }

    /// Scope of the current action: explicit `scope` config, else the
    /// registered implementation's scope, else item scope.
    pub fn scope(&self) -> ActionScope {
        self.config
            .get("scope")
            .and_then(Value::as_str)
            .and_then(ActionScope::parse)
            .or_else(|| self.registry.get(&self.action).map(|a| a.scope()))
            .unwrap_or(ActionScope::Item)
    }
}

/// Find/paginate query as far as containment is concerned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub contain: RelatedModels,
}

impl Query {
    pub fn has_contain(&self) -> bool {
        !self.contain.is_empty()
    }
}

// ============================================================================
// Context files
// ============================================================================

/// A context as written in a YAML file: every action's configuration
/// keyed by action name, from which the current action's is picked.
#[derive(Debug, Clone, Deserialize)]
pub struct ContextFile {
    pub controller: ControllerNames,

    /// Default action to render
    #[serde(default)]
    pub action: Option<String>,

    pub table: TableSchema,

    #[serde(default)]
    pub actions: ActionRegistry,

    /// Per-action configuration trees
    #[serde(default)]
    pub config: IndexMap<String, Value>,

    #[serde(default)]
    pub entity: Option<Map<String, Value>>,

    #[serde(default)]
    pub request_data: Map<String, Value>,
}

impl ContextFile {
    pub fn from_yaml(content: &str) -> Result<Self, ScaffoldError> {
        serde_yaml::from_str(content).map_err(|source| ScaffoldError::Yaml {
            context: "context file".to_string(),
            source,
        })
    }

    /// Build the context for `action` (or the file's default action),
    /// layering its configuration over `defaults`.
    pub fn into_context(
        self,
        action: Option<&str>,
        defaults: &ConfigTree,
    ) -> Result<ExecutionContext, ScaffoldError> {
        let action = action
            .map(str::to_string)
            .or(self.action)
            .ok_or_else(|| ScaffoldError::MissingAction("pass --action or set 'action'".into()))?;

        let own = self.config.get(&action).cloned().unwrap_or(Value::Null);
        let config = ConfigTree::layered(defaults, &ConfigTree::new(own));

        let mut context = ExecutionContext::new(self.controller, &action, config, self.table, self.actions);
        context.entity = self.entity;
        context.request_data = self.request_data;
        Ok(context)
    }
}
