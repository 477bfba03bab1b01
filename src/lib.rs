//! # nodegate - Node Classification and Action Gating
//!
//! **nodegate** is the decision core of an infrastructure-management dashboard.
//! Given node records fetched from the backend (controllers, devices and
//! machines), it answers the questions the view layer asks before rendering:
//!
//! 1.  **Classify**: which concrete variant a node is (`policy::classify`).
//! 2.  **Gate**: whether the form for an action may be opened for a node right now
//!     (`policy::can_open_action_form`).
//! 3.  **Label**: how an action, a node type or the side panel should be titled
//!     (`format` and `side_panel`).
//!
//! Every function in these modules is pure and total: unmatched input falls back
//! to a default (`"Unknown"`, `"Action"`, the caller's default title) instead of
//! failing. The only fallible edges are parsing identifiers and loading
//! snapshots, which return the errors in [`error`].
//!
//! ## Quick Start
//!
//! ```rust
//! use nodegate::prelude::*;
//!
//! let machine: Node = Machine::new("abc123", "koala", NodeStatus::Ready)
//!     .with_actions([NodeAction::Deploy, NodeAction::Release])
//!     .into();
//!
//! assert_eq!(classify(&machine), NodeKind::Machine);
//! assert!(can_open_action_form(Some(&machine), Some(NodeAction::Deploy)));
//! assert!(!can_open_action_form(Some(&machine), Some(NodeAction::Lock)));
//!
//! // Ready machines can always be picked as clone destinations.
//! assert!(can_open_action_form(Some(&machine), Some(NodeAction::Clone)));
//!
//! assert_eq!(node_action_label("koala", "deploy", false), "Deploy koala");
//! assert_eq!(node_action_label("koala", "deploy", true), "Deploying koala");
//!
//! let content = SidePanelContent::from(views::ADD_DOMAIN);
//! assert_eq!(side_panel_title("Domains", Some(&content)), "Add domains");
//! assert_eq!(side_panel_title("Domains", None), "Domains");
//! ```

pub mod error;
pub mod format;
pub mod node;
pub mod policy;
pub mod prelude;
pub mod side_panel;
