//! Tests for the action label, action title and node type formatters.
use nodegate::prelude::*;

#[test]
fn test_deploy_label() {
    assert_eq!(node_action_label("machine-1", "deploy", false), "Deploy machine-1");
    assert_eq!(node_action_label("machine-1", "deploy", true), "Deploying machine-1");
}

#[test]
fn test_unknown_action_label_falls_back() {
    assert_eq!(node_action_label("x", "totally-unknown-action", false), "Process x");
    assert_eq!(node_action_label("x", "totally-unknown-action", true), "Processing x");
    assert_eq!(node_action_label("x", "", false), "Process x");
}

#[test]
fn test_labels_with_custom_phrasing() {
    let cases = [
        ("abort", false, "Abort actions for 2 machines"),
        ("abort", true, "Aborting actions for 2 machines"),
        ("acquire", false, "Allocate 2 machines"),
        ("check-power", true, "Checking power for 2 machines"),
        ("clone", false, "Clone to 2 machines"),
        ("clone", true, "Cloning in progress"),
        ("commission", false, "Start commissioning for 2 machines"),
        ("exit-rescue-mode", true, "Exiting rescue mode for 2 machines"),
        ("import-images", false, "Import images for 2 machines"),
        ("mark-broken", false, "Mark 2 machines broken"),
        ("mark-fixed", true, "Marking 2 machines fixed"),
        ("on", false, "Power on 2 machines"),
        ("off", true, "Powering off 2 machines"),
        ("soft-off", false, "Soft power off 2 machines"),
        ("soft-off", true, "Powering off 2 machines"),
        ("override-failed-testing", false, "Override failed tests for 2 machines"),
        ("rescue-mode", true, "Entering rescue mode for 2 machines"),
        ("set-pool", false, "Set pool for 2 machines"),
        ("set-zone", true, "Setting zone for 2 machines"),
        ("tag", false, "Update tags for 2 machines"),
        ("untag", true, "Updating tags for 2 machines"),
        ("test", false, "Start tests for 2 machines"),
        ("unlock", true, "Unlocking 2 machines"),
    ];
    for (action, processing, expected) in cases {
        assert_eq!(
            node_action_label("2 machines", action, processing),
            expected,
            "label for '{}' (processing: {})",
            action,
            processing
        );
    }
}

#[test]
fn test_pod_action_labels() {
    assert_eq!(node_action_label("pod-1", "compose", false), "Compose pod-1");
    assert_eq!(node_action_label("pod-1", "refresh", true), "Refreshing pod-1");
    assert_eq!(node_action_label("pod-1", "remove", false), "Remove pod-1");
}

#[test]
fn test_every_action_has_a_dedicated_label() {
    for action in NodeAction::ALL {
        for processing in [false, true] {
            let fallback = if processing { "Processing m" } else { "Process m" };
            assert_ne!(node_action_label("m", action.as_str(), processing), fallback);
        }
    }
}

#[test]
fn test_action_titles() {
    assert_eq!(node_action_title(Some(NodeAction::Acquire)), "Allocate");
    assert_eq!(node_action_title(Some(NodeAction::Clone)), "Clone from");
    assert_eq!(node_action_title(Some(NodeAction::Off)), "Power off");
    assert_eq!(node_action_title(Some(NodeAction::RescueMode)), "Enter rescue mode");
    assert_eq!(node_action_title(Some(NodeAction::Untag)), "Action");
    assert_eq!(node_action_title(None), "Action");
}

#[test]
fn test_node_type_display() {
    assert_eq!(node_type_display(NodeType::Machine), "Machine");
    assert_eq!(node_type_display(NodeType::DEFAULT), "Machine");
    assert_eq!(node_type_display(NodeType::Device), "Device");
    assert_eq!(node_type_display(NodeType::RackController), "Rack controller");
    assert_eq!(node_type_display(NodeType::RegionController), "Region controller");
    assert_eq!(
        node_type_display(NodeType::RegionAndRackController),
        "Region and rack controller"
    );
    assert_eq!(node_type_display_code(2), "Rack controller");
    assert_eq!(node_type_display_code(42), "Unknown");
}

#[test]
fn test_formatters_are_idempotent() {
    for action in NodeAction::ALL {
        assert_eq!(
            node_action_label("m", action.as_str(), true),
            node_action_label("m", action.as_str(), true)
        );
        assert_eq!(node_action_title(Some(action)), node_action_title(Some(action)));
    }
}
