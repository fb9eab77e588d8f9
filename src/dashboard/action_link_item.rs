use serde::Serialize;
use serde_json::{Map, Value};

use crate::dashboard::link_item::{LinkDescription, LinkItem, LinkUrl};
use crate::error::DashboardError;

pub const DEFAULT_ACTION_CLASS: &str = "btn btn-default";

/// A link with secondary action buttons rendered beside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionLinkItem {
    #[serde(flatten)]
    link: LinkItem,
    actions: Vec<LinkItem>,
}

impl ActionLinkItem {
    pub fn new(
        title: &str,
        url: Option<LinkUrl>,
        options: Map<String, Value>,
        actions: Vec<LinkItem>,
    ) -> Result<Self, DashboardError> {
        let link = LinkItem::new(title, url, options)?;
        let actions = actions
            .into_iter()
            .map(|action| action.with_default_class(DEFAULT_ACTION_CLASS))
            .collect();
        Ok(Self { link, actions })
    }

    /// Build from a description whose `actions` are link descriptions.
    pub fn from_value(value: &Value) -> Result<Self, DashboardError> {
        let description = LinkDescription::parse(value)?;
        let actions = description
            .actions
            .unwrap_or_default()
            .iter()
            .map(LinkItem::from_value)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(
            description.title.as_deref().unwrap_or(""),
            description.url,
            description.options.unwrap_or_default(),
            actions,
        )
    }

    pub fn link(&self) -> &LinkItem {
        &self.link
    }

    pub fn actions(&self) -> &[LinkItem] {
        &self.actions
    }
}
