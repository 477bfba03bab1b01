//! Side-panel view selectors and their titles.
//!
//! A side panel hosts one contextual form at a time. What it shows is described
//! by a [`SidePanelContent`]: a `(section, name)` view tag plus an optional JSON
//! payload of extras for the form.

pub mod views;

use crate::format::node_action_title;
use crate::node::NodeAction;
use serde::{Deserialize, Serialize};

pub use views::NamedView;

/// A `(section, name)` view tag. Serialized as a two-element array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SidePanelView(pub String, pub String);

impl SidePanelView {
    pub fn new(section: impl Into<String>, name: impl Into<String>) -> Self {
        Self(section.into(), name.into())
    }

    /// The view for a node action form, e.g. `("machineActionForm", "deploy")`.
    pub fn node_action(section: impl Into<String>, action: NodeAction) -> Self {
        Self::new(section, action.as_str())
    }

    pub fn section(&self) -> &str {
        &self.0
    }

    pub fn name(&self) -> &str {
        &self.1
    }
}

/// What the side panel should currently show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidePanelContent {
    pub view: SidePanelView,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<serde_json::Value>,
}

impl SidePanelContent {
    pub fn new(view: SidePanelView) -> Self {
        Self { view, extras: None }
    }

    pub fn with_extras(mut self, extras: serde_json::Value) -> Self {
        self.extras = Some(extras);
        self
    }
}

impl From<NamedView> for SidePanelContent {
    fn from(view: NamedView) -> Self {
        Self::new(view.view())
    }
}

/// Get the title to show for the current side-panel content.
///
/// * no content: `default_title`
/// * a catalogued view name: its fixed title
/// * any other name: the title of the node action with that name, or
///   `"Action"` if it is not one
/// * an empty name: `default_title`
pub fn side_panel_title(default_title: &str, content: Option<&SidePanelContent>) -> String {
    let Some(content) = content else {
        return default_title.to_string();
    };
    let name = content.view.name();

    if let Some(named) = views::find_by_name(name) {
        return named.title.to_string();
    }
    if name.is_empty() {
        return default_title.to_string();
    }
    node_action_title(name.parse::<NodeAction>().ok()).to_string()
}
