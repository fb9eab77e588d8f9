use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::error::DashboardError;

/// Link target: a plain path/URL or a route descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkUrl {
    Path(String),
    Route(Map<String, Value>),
}

impl LinkUrl {
    pub fn is_empty(&self) -> bool {
        match self {
            LinkUrl::Path(path) => path.is_empty(),
            LinkUrl::Route(route) => route.is_empty(),
        }
    }

    /// Absolute `http://` or `https://` URL.
    pub fn is_external(&self) -> bool {
        match self {
            LinkUrl::Path(path) => path.starts_with("http://") || path.starts_with("https://"),
            LinkUrl::Route(_) => false,
        }
    }
}

impl From<&str> for LinkUrl {
    fn from(path: &str) -> Self {
        LinkUrl::Path(path.to_string())
    }
}

/// A titled link with HTML options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkItem {
    title: String,
    url: LinkUrl,
    options: Map<String, Value>,
}

impl LinkItem {
    /// Title and url are required. External URLs open in a new window
    /// unless the options say otherwise.
    pub fn new(
        title: &str,
        url: Option<LinkUrl>,
        options: Map<String, Value>,
    ) -> Result<Self, DashboardError> {
        if title.is_empty() {
            return Err(DashboardError::MissingTitle("LinkItem"));
        }
        let url = match url {
            Some(url) if !url.is_empty() => url,
            _ => return Err(DashboardError::MissingUrl("LinkItem")),
        };

        let mut item = Self {
            title: title.to_string(),
            url,
            options: Map::new(),
        };
        item.set_options(options);
        Ok(item)
    }

    /// Build from a `{title, url, options}` description.
    pub fn from_value(value: &Value) -> Result<Self, DashboardError> {
        let description = LinkDescription::parse(value)?;
        Self::new(
            description.title.as_deref().unwrap_or(""),
            description.url,
            description.options.unwrap_or_default(),
        )
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &LinkUrl {
        &self.url
    }

    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    pub fn set_options(&mut self, mut options: Map<String, Value>) {
        if self.url.is_external() {
            options
                .entry("target")
                .or_insert_with(|| Value::String("_blank".to_string()));
        }
        self.options = options;
    }

    /// Fill in a default CSS class when none is set.
    pub(crate) fn with_default_class(mut self, class: &str) -> Self {
        self.options
            .entry("class")
            .or_insert_with(|| json!([class]));
        self
    }
}

/// Raw `{title, url, options, actions}` as written in dashboard files.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct LinkDescription {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<LinkUrl>,
    #[serde(default)]
    pub options: Option<Map<String, Value>>,
    #[serde(default)]
    pub actions: Option<Vec<Value>>,
}

impl LinkDescription {
    pub fn parse(value: &Value) -> Result<Self, DashboardError> {
        serde_json::from_value(value.clone())
            .map_err(|e| DashboardError::MalformedLink(e.to_string()))
    }
}
