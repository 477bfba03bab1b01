//! Display strings for node types and node actions.

use crate::node::{NodeAction, NodeType, PodAction};

/// Get the node type display name from a node type.
pub fn node_type_display(node_type: NodeType) -> &'static str {
    match node_type {
        NodeType::Machine => "Machine",
        NodeType::Device => "Device",
        NodeType::RackController => "Rack controller",
        NodeType::RegionController => "Region controller",
        NodeType::RegionAndRackController => "Region and rack controller",
    }
}

/// Same as [`node_type_display`], for the raw numeric code. Unrecognised codes
/// display as `"Unknown"`.
pub fn node_type_display_code(code: u8) -> &'static str {
    NodeType::try_from(code).map_or("Unknown", node_type_display)
}

/// Get the title of a node action, as shown on menus and form headers.
pub fn node_action_title(action: Option<NodeAction>) -> &'static str {
    let Some(action) = action else {
        return "Action";
    };
    match action {
        NodeAction::Abort => "Abort",
        NodeAction::Acquire => "Allocate",
        NodeAction::CheckPower => "Check power",
        NodeAction::Clone => "Clone from",
        NodeAction::Commission => "Commission",
        NodeAction::Delete => "Delete",
        NodeAction::Deploy => "Deploy",
        NodeAction::ExitRescueMode => "Exit rescue mode",
        NodeAction::ImportImages => "Import images",
        NodeAction::Lock => "Lock",
        NodeAction::MarkBroken => "Mark broken",
        NodeAction::MarkFixed => "Mark fixed",
        NodeAction::Off => "Power off",
        NodeAction::On => "Power on",
        NodeAction::SoftOff => "Soft power off",
        NodeAction::OverrideFailedTesting => "Override failed testing",
        NodeAction::Release => "Release",
        NodeAction::RescueMode => "Enter rescue mode",
        NodeAction::SetPool => "Set pool",
        NodeAction::SetZone => "Set zone",
        NodeAction::Tag => "Tag",
        NodeAction::Test => "Test",
        NodeAction::Unlock => "Unlock",
        // No dedicated title; untagging happens from the tag form.
        NodeAction::Untag => "Action",
    }
}

/// Builds the submit/progress label for an action on `model`.
///
/// `action` is the backend's action name. Node actions and the pod actions
/// (`compose`, `refresh`, `remove`) have dedicated phrasing; anything else falls
/// back to `"Process <model>"` / `"Processing <model>"`.
pub fn node_action_label(model: &str, action: &str, is_processing: bool) -> String {
    let pick = |processing: &str, idle: &str| -> String {
        if is_processing {
            processing.to_string()
        } else {
            idle.to_string()
        }
    };

    if let Ok(pod_action) = action.parse::<PodAction>() {
        let verb = match pod_action {
            PodAction::Compose => pick("Composing", "Compose"),
            PodAction::Refresh => pick("Refreshing", "Refresh"),
            PodAction::Remove => pick("Removing", "Remove"),
        };
        return format!("{} {}", verb, model);
    }

    let Ok(action) = action.parse::<NodeAction>() else {
        return format!("{} {}", pick("Processing", "Process"), model);
    };

    match action {
        NodeAction::Abort => format!("{} actions for {}", pick("Aborting", "Abort"), model),
        NodeAction::Acquire => format!("{} {}", pick("Allocating", "Allocate"), model),
        NodeAction::CheckPower => {
            format!("{} for {}", pick("Checking power", "Check power"), model)
        }
        NodeAction::Clone if is_processing => "Cloning in progress".to_string(),
        NodeAction::Clone => format!("Clone to {}", model),
        NodeAction::Commission => {
            format!("{} commissioning for {}", pick("Starting", "Start"), model)
        }
        NodeAction::Delete => format!("{} {}", pick("Deleting", "Delete"), model),
        NodeAction::Deploy => format!("{} {}", pick("Deploying", "Deploy"), model),
        NodeAction::ExitRescueMode => {
            format!("{} rescue mode for {}", pick("Exiting", "Exit"), model)
        }
        NodeAction::ImportImages => {
            format!("{} for {}", pick("Importing images", "Import images"), model)
        }
        NodeAction::Lock => format!("{} {}", pick("Locking", "Lock"), model),
        NodeAction::On => format!("{} on {}", pick("Powering", "Power"), model),
        NodeAction::Off => format!("{} off {}", pick("Powering", "Power"), model),
        NodeAction::MarkBroken => format!("{} {} broken", pick("Marking", "Mark"), model),
        NodeAction::MarkFixed => format!("{} {} fixed", pick("Marking", "Mark"), model),
        NodeAction::OverrideFailedTesting => format!(
            "{} failed tests for {}",
            pick("Overriding", "Override"),
            model
        ),
        NodeAction::Release => format!("{} {}", pick("Releasing", "Release"), model),
        NodeAction::RescueMode => {
            format!("{} rescue mode for {}", pick("Entering", "Enter"), model)
        }
        NodeAction::SetPool => format!("{} pool for {}", pick("Setting", "Set"), model),
        NodeAction::SetZone => format!("{} zone for {}", pick("Setting", "Set"), model),
        NodeAction::SoftOff => format!("{} off {}", pick("Powering", "Soft power"), model),
        NodeAction::Tag | NodeAction::Untag => {
            format!("{} tags for {}", pick("Updating", "Update"), model)
        }
        NodeAction::Test => format!("{} tests for {}", pick("Starting", "Start"), model),
        NodeAction::Unlock => format!("{} {}", pick("Unlocking", "Unlock"), model),
    }
}
