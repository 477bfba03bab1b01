//! Node classification and action gating.
//!
//! These are the decisions the view layer makes before rendering an action
//! form: which variant a node is, and whether a requested action may be opened
//! for it right now. Every function here is pure and total.

use crate::node::{Node, NodeAction, NodeKind, NodeStatus};

/// Statuses a machine must be in to be chosen as a clone destination.
pub const CLONE_DESTINATION_STATUSES: [NodeStatus; 2] =
    [NodeStatus::Ready, NodeStatus::FailedTesting];

/// Determines the concrete variant of a node from its `link_type`.
pub fn classify(node: &Node) -> NodeKind {
    node.link_type().into()
}

/// Returns whether a node is a controller.
pub fn node_is_controller(node: Option<&Node>) -> bool {
    matches!(node, Some(Node::Controller(_)))
}

/// Returns whether a node is a device.
pub fn node_is_device(node: Option<&Node>) -> bool {
    matches!(node, Some(Node::Device(_)))
}

/// Returns whether a node is a machine.
pub fn node_is_machine(node: Option<&Node>) -> bool {
    matches!(node, Some(Node::Machine(_)))
}

/// Returns whether a node is the details version of its type, i.e. the full
/// record has been fetched rather than the list summary.
pub fn is_node_details(node: Option<&Node>) -> bool {
    match node {
        Some(Node::Controller(controller)) => controller.details.is_some(),
        Some(Node::Device(device)) => device.details.is_some(),
        Some(Node::Machine(machine)) => machine.details.is_some(),
        Some(Node::Unknown) | None => false,
    }
}

/// Determines whether a node can open the action form for a particular action.
///
/// The advertised action set decides, with two exceptions for machines:
///
/// * `Clone` is chosen on the *destination* machines before the source is
///   picked inside the form, so it depends on the destination's status
///   ([`CLONE_DESTINATION_STATUSES`]) and ignores the advertised set.
/// * `CheckPower` is always available for machines, even though the backend
///   never lists it.
pub fn can_open_action_form(node: Option<&Node>, action: Option<NodeAction>) -> bool {
    let (Some(node), Some(action)) = (node, action) else {
        return false;
    };

    let allowed = match (node, action) {
        (Node::Machine(machine), NodeAction::Clone) => {
            CLONE_DESTINATION_STATUSES.contains(&machine.status)
        }
        (Node::Machine(_), NodeAction::CheckPower) => true,
        _ => node
            .actions()
            .is_some_and(|advertised| advertised.contains(&action)),
    };

    tracing::trace!(
        system_id = node.system_id().unwrap_or("<unknown>"),
        action = %action,
        allowed,
        "checked action form gate"
    );
    allowed
}

/// Every action whose form may currently be opened for `node`, in menu order.
pub fn permitted_actions(node: &Node) -> Vec<NodeAction> {
    NodeAction::ALL
        .into_iter()
        .filter(|action| can_open_action_form(Some(node), Some(*action)))
        .collect()
}
