use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::action::action_model::ActionScope;

// ============================================================================
// Action registry: the actions the application exposes
// ============================================================================

/// Implementation kind backing a registered action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionKind {
    Index,
    View,
    Add,
    Edit,
    Delete,
    /// Helper endpoint for select boxes; never user-facing
    Lookup,
    Custom(String),
}

impl ActionKind {
    /// Scope an implementation of this kind declares for itself.
    ///
    /// `Add` declares item scope like the other form actions; the action
    /// resolver links it from collection views regardless.
    pub fn declared_scope(&self) -> ActionScope {
        match self {
            ActionKind::Index | ActionKind::Lookup => ActionScope::Collection,
            _ => ActionScope::Item,
        }
    }
}

impl From<String> for ActionKind {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "index" => ActionKind::Index,
            "view" => ActionKind::View,
            "add" => ActionKind::Add,
            "edit" => ActionKind::Edit,
            "delete" => ActionKind::Delete,
            "lookup" => ActionKind::Lookup,
            _ => ActionKind::Custom(value),
        }
    }
}

impl From<ActionKind> for String {
    fn from(kind: ActionKind) -> Self {
        match kind {
            ActionKind::Index => "index".into(),
            ActionKind::View => "view".into(),
            ActionKind::Add => "add".into(),
            ActionKind::Edit => "edit".into(),
            ActionKind::Delete => "delete".into(),
            ActionKind::Lookup => "lookup".into(),
            ActionKind::Custom(name) => name,
        }
    }
}

/// A single mapped action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredAction {
    pub name: String,
    pub kind: ActionKind,

    /// Overrides the kind's declared scope
    #[serde(default)]
    pub scope: Option<ActionScope>,
}

impl RegisteredAction {
    pub fn new(name: &str, kind: ActionKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            scope: None,
        }
    }

    pub fn scope(&self) -> ActionScope {
        self.scope.unwrap_or_else(|| self.kind.declared_scope())
    }
}

/// Ordered set of the actions currently mapped for a controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<RegisteredAction>", into = "Vec<RegisteredAction>")]
pub struct ActionRegistry {
    actions: IndexMap<String, RegisteredAction>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, kind: ActionKind) -> Self {
        self.register(RegisteredAction::new(name, kind));
        self
    }

    pub fn register(&mut self, action: RegisteredAction) {
        self.actions.insert(action.name.clone(), action);
    }

    /// Whether `name` is backed by a registered implementation.
    pub fn is_mapped(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredAction> {
        self.actions.get(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    /// Names of every action backed by the lookup helper kind.
    pub fn lookup_actions(&self) -> impl Iterator<Item = &str> {
        self.actions
            .values()
            .filter(|a| a.kind == ActionKind::Lookup)
            .map(|a| a.name.as_str())
    }
}

impl From<Vec<RegisteredAction>> for ActionRegistry {
    fn from(actions: Vec<RegisteredAction>) -> Self {
        let mut registry = Self::new();
        for action in actions {
            registry.register(action);
        }
        registry
    }
}

impl From<ActionRegistry> for Vec<RegisteredAction> {
    fn from(registry: ActionRegistry) -> Self {
        registry.actions.into_values().collect()
    }
}
