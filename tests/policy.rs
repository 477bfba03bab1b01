//! Tests for node classification and the action form gate.
mod common;
use common::*;
use nodegate::node::{ControllerDetails, DeviceDetails, MachineDetails};
use nodegate::prelude::*;

fn is_special(node: &Node, action: NodeAction) -> bool {
    node_is_machine(Some(node)) && matches!(action, NodeAction::Clone | NodeAction::CheckPower)
}

#[test]
fn test_classify_each_variant() {
    assert_eq!(classify(&machine(NodeStatus::Ready, &[])), NodeKind::Machine);
    assert_eq!(classify(&controller(&[])), NodeKind::Controller);
    assert_eq!(classify(&device(&[])), NodeKind::Device);
    assert_eq!(classify(&Node::Unknown), NodeKind::Unknown);
}

#[test]
fn test_variant_predicates() {
    let machine = machine(NodeStatus::Ready, &[]);
    let controller = controller(&[]);
    let device = device(&[]);

    assert!(node_is_machine(Some(&machine)));
    assert!(!node_is_machine(Some(&controller)));
    assert!(node_is_controller(Some(&controller)));
    assert!(!node_is_controller(Some(&device)));
    assert!(node_is_device(Some(&device)));
    assert!(!node_is_device(Some(&machine)));

    assert!(!node_is_machine(None));
    assert!(!node_is_controller(None));
    assert!(!node_is_device(None));
    assert!(!node_is_machine(Some(&Node::Unknown)));
}

#[test]
fn test_is_node_details() {
    let summary = machine(NodeStatus::Ready, &[]);
    assert!(!is_node_details(Some(&summary)));

    let detailed: Node = Machine::new("abc123", "koala", NodeStatus::Ready)
        .with_details(MachineDetails::default())
        .into();
    assert!(is_node_details(Some(&detailed)));

    let detailed: Node = Controller::new("c", "c", NodeType::RackController, NodeStatus::Deployed)
        .with_details(ControllerDetails::default())
        .into();
    assert!(is_node_details(Some(&detailed)));

    let detailed: Node = Device::new("d", "d", NodeStatus::Deployed)
        .with_details(DeviceDetails::default())
        .into();
    assert!(is_node_details(Some(&detailed)));

    assert!(!is_node_details(None));
    assert!(!is_node_details(Some(&Node::Unknown)));
}

#[test]
fn test_absent_node_or_action_is_denied() {
    let node = machine(NodeStatus::Ready, &NodeAction::ALL);
    for action in NodeAction::ALL {
        assert!(!can_open_action_form(None, Some(action)));
    }
    assert!(!can_open_action_form(Some(&node), None));
    assert!(!can_open_action_form(None, None));
}

#[test]
fn test_unadvertised_actions_are_denied() {
    for node in all_nodes(&[]) {
        for action in NodeAction::ALL {
            if is_special(&node, action) {
                continue;
            }
            assert!(
                !can_open_action_form(Some(&node), Some(action)),
                "{:?} should be denied for {:?}",
                action,
                node
            );
        }
    }
}

#[test]
fn test_advertised_actions_are_allowed() {
    for node in all_nodes(&NodeAction::ALL) {
        for action in NodeAction::ALL {
            if is_special(&node, action) {
                continue;
            }
            assert!(
                can_open_action_form(Some(&node), Some(action)),
                "{:?} should be allowed for {:?}",
                action,
                node
            );
        }
    }
}

#[test]
fn test_single_advertised_action() {
    let node = controller(&[NodeAction::ImportImages]);
    for action in NodeAction::ALL {
        assert_eq!(
            can_open_action_form(Some(&node), Some(action)),
            action == NodeAction::ImportImages
        );
    }
}

#[test]
fn test_clone_destination_statuses() {
    for status in NodeStatus::ALL {
        let eligible = matches!(status, NodeStatus::Ready | NodeStatus::FailedTesting);
        for advertised in [&[][..], &[NodeAction::Clone][..]] {
            let node = machine(status, advertised);
            assert_eq!(
                can_open_action_form(Some(&node), Some(NodeAction::Clone)),
                eligible,
                "clone for a {} machine (advertised: {:?})",
                status,
                advertised
            );
        }
    }
}

#[test]
fn test_clone_on_other_variants_follows_advertised_set() {
    assert!(!can_open_action_form(Some(&controller(&[])), Some(NodeAction::Clone)));
    assert!(can_open_action_form(
        Some(&device(&[NodeAction::Clone])),
        Some(NodeAction::Clone)
    ));
}

#[test]
fn test_check_power_always_allowed_for_machines() {
    for status in NodeStatus::ALL {
        let node = machine(status, &[]);
        assert!(can_open_action_form(Some(&node), Some(NodeAction::CheckPower)));
    }
    assert!(!can_open_action_form(Some(&controller(&[])), Some(NodeAction::CheckPower)));
    assert!(!can_open_action_form(Some(&device(&[])), Some(NodeAction::CheckPower)));
}

#[test]
fn test_unknown_nodes_are_never_permitted() {
    for action in NodeAction::ALL {
        assert!(!can_open_action_form(Some(&Node::Unknown), Some(action)));
    }
    assert!(permitted_actions(&Node::Unknown).is_empty());
}

#[test]
fn test_permitted_actions_for_deployed_machine() {
    let node = machine(NodeStatus::Deployed, &[NodeAction::Release, NodeAction::Lock]);
    assert_eq!(
        permitted_actions(&node),
        vec![NodeAction::CheckPower, NodeAction::Lock, NodeAction::Release]
    );
}

#[test]
fn test_gate_is_idempotent() {
    for node in all_nodes(&[NodeAction::Deploy]) {
        for action in NodeAction::ALL {
            let first = can_open_action_form(Some(&node), Some(action));
            let second = can_open_action_form(Some(&node), Some(action));
            assert_eq!(first, second);
        }
    }
}
