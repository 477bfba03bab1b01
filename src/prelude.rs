//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! nodegate crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use nodegate::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let snapshot = NodeSnapshot::from_file("path/to/nodes.json")?;
//!
//! for node in &snapshot.nodes {
//!     println!("{:?}: {:?}", classify(node), permitted_actions(node));
//! }
//! # Ok(())
//! # }
//! ```

// Data model
pub use crate::node::{
    Controller, Device, Machine, Node, NodeAction, NodeKind, NodeLinkType, NodeSnapshot,
    NodeStatus, NodeType, PodAction, ServiceHealth, ServiceStatus,
};

// Classification and gating
pub use crate::policy::{
    can_open_action_form, classify, is_node_details, node_is_controller, node_is_device,
    node_is_machine, permitted_actions,
};

// Display strings
pub use crate::format::{
    node_action_label, node_action_title, node_type_display, node_type_display_code,
};
pub use crate::node::{controller_health, service_summary};
pub use crate::side_panel::{SidePanelContent, SidePanelView, side_panel_title, views};

// Error types
pub use crate::error::{ParseError, SnapshotError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
