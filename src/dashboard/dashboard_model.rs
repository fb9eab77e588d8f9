use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dashboard::action_link_item::ActionLinkItem;
use crate::dashboard::link_item::{LinkDescription, LinkItem};
use crate::error::DashboardError;

// ============================================================================
// Dashboard modules
// ============================================================================

/// Entry of a link table: a plain link or one carrying action buttons.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LinkEntry {
    Link(LinkItem),
    ActionLink(ActionLinkItem),
}

impl LinkEntry {
    /// Pick the entry type from a description: `actions` present means an
    /// action link.
    pub fn from_value(value: &Value) -> Result<Self, DashboardError> {
        let description = LinkDescription::parse(value)?;
        if description.actions.is_some() {
            Ok(LinkEntry::ActionLink(ActionLinkItem::from_value(value)?))
        } else {
            Ok(LinkEntry::Link(LinkItem::from_value(value)?))
        }
    }
}

/// A titled list of links, typically one per controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkTableModule {
    title: String,
    links: Vec<LinkEntry>,
}

impl LinkTableModule {
    pub fn new(title: &str, links: &[Value]) -> Result<Self, DashboardError> {
        if title.is_empty() {
            return Err(DashboardError::MissingTitle("LinkTableModule"));
        }

        let mut module = Self {
            title: title.to_string(),
            links: Vec::new(),
        };
        for link in links {
            module.add_link(LinkEntry::from_value(link)?);
        }
        Ok(module)
    }

    pub fn add_link(&mut self, link: LinkEntry) -> &mut Self {
        self.links.push(link);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn links(&self) -> &[LinkEntry] {
        &self.links
    }
}

/// Anything that can be placed in a dashboard column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "module", rename_all = "snake_case")]
pub enum DashboardModule {
    LinkTable(LinkTableModule),
    Link(LinkItem),
    ActionLink(ActionLinkItem),
}

impl DashboardModule {
    /// Element template the renderer uses for this module.
    pub fn template(&self) -> &'static str {
        match self {
            DashboardModule::LinkTable(_) => "LinkTable",
            DashboardModule::Link(_) => "LinkItem",
            DashboardModule::ActionLink(_) => "ActionLinkItem",
        }
    }
}

// ============================================================================
// Dashboard
// ============================================================================

pub const DEFAULT_DASHBOARD_TITLE: &str = "Dashboard";

/// A grid of modules laid out in 1, 2, 3, 4, 6 or 12 columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    title: String,
    columns: u64,
    column_class: String,
    children: BTreeMap<usize, Vec<DashboardModule>>,
}

impl Dashboard {
    pub fn new(title: Option<&str>, columns: u64) -> Result<Self, DashboardError> {
        let mut dashboard = Self {
            title: title.unwrap_or(DEFAULT_DASHBOARD_TITLE).to_string(),
            columns: 1,
            column_class: String::new(),
            children: BTreeMap::new(),
        };
        dashboard.set_columns(columns)?;
        Ok(dashboard)
    }

    /// Change the column count, updating the grid class.
    pub fn set_columns(&mut self, columns: u64) -> Result<&mut Self, DashboardError> {
        let span = match columns {
            1 | 2 | 3 | 4 | 6 | 12 => 12 / columns,
            other => return Err(DashboardError::InvalidColumns(other)),
        };
        self.columns = columns;
        self.column_class = format!("col-md-{}", span);
        Ok(self)
    }

    /// Append a module to a column (numbered from 1).
    pub fn add_to_column(
        &mut self,
        module: DashboardModule,
        column: usize,
    ) -> Result<&mut Self, DashboardError> {
        if column == 0 {
            return Err(DashboardError::InvalidColumnIndex(column));
        }
        self.children.entry(column).or_default().push(module);
        Ok(self)
    }

    pub fn column_children(&self, column: usize) -> &[DashboardModule] {
        self.children.get(&column).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn columns(&self) -> u64 {
        self.columns
    }

    pub fn column_class(&self) -> &str {
        &self.column_class
    }
}

// ============================================================================
// Dashboard files
// ============================================================================

/// Dashboard as written in YAML/JSON before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSpec {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default = "default_columns")]
    pub columns: u64,

    #[serde(default)]
    pub modules: Vec<ModuleSpec>,
}

fn default_columns() -> u64 {
    1
}

/// One module placement in a dashboard file.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleSpec {
    #[serde(default = "default_column")]
    pub column: usize,

    #[serde(rename = "type")]
    pub kind: ModuleKind,

    /// Remaining keys describe the module itself
    #[serde(flatten)]
    pub body: serde_json::Map<String, Value>,
}

fn default_column() -> usize {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    LinkTable,
    Link,
    ActionLink,
}

impl DashboardSpec {
    /// Validate and build. The first invalid module aborts the build.
    pub fn build(&self) -> Result<Dashboard, DashboardError> {
        let mut dashboard = Dashboard::new(self.title.as_deref(), self.columns)?;

        for spec in &self.modules {
            let body = Value::Object(spec.body.clone());
            let module = match spec.kind {
                ModuleKind::LinkTable => {
                    let title = spec.body.get("title").and_then(Value::as_str).unwrap_or("");
                    let links = spec
                        .body
                        .get("links")
                        .and_then(Value::as_array)
                        .cloned()
                        .unwrap_or_default();
                    DashboardModule::LinkTable(LinkTableModule::new(title, &links)?)
                }
                ModuleKind::Link => DashboardModule::Link(LinkItem::from_value(&body)?),
                ModuleKind::ActionLink => {
                    DashboardModule::ActionLink(ActionLinkItem::from_value(&body)?)
                }
            };
            dashboard.add_to_column(module, spec.column)?;
        }

        Ok(dashboard)
    }
}
