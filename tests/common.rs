//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use nodegate::prelude::*;

/// A snapshot in the backend's JSON shape: one node of each variant plus a
/// record with a link type this crate does not know.
pub const SNAPSHOT_JSON: &str = r#"{
  "nodes": [
    {
      "link_type": "machine",
      "system_id": "abc123",
      "hostname": "koala",
      "fqdn": "koala.maas",
      "status": "Ready",
      "actions": ["deploy", "commission", "tag"],
      "power_state": "off",
      "pool": "default",
      "zone": "zone-a"
    },
    {
      "link_type": "controller",
      "system_id": "ctl001",
      "hostname": "region-1",
      "node_type": 4,
      "status": "Deployed",
      "actions": ["set-zone", "import-images"],
      "service_ids": [1, 2, 3],
      "details": { "version": "3.5.0", "vlan_ids": [5001] }
    },
    {
      "link_type": "device",
      "system_id": "dev001",
      "hostname": "printer",
      "status": "Deployed",
      "actions": ["delete"],
      "primary_mac": "00:11:22:33:44:55"
    },
    {
      "link_type": "pod",
      "system_id": "pod001",
      "hostname": "lxd-host"
    }
  ]
}"#;

pub fn machine(status: NodeStatus, actions: &[NodeAction]) -> Node {
    Machine::new("abc123", "koala", status)
        .with_actions(actions.iter().copied())
        .into()
}

pub fn controller(actions: &[NodeAction]) -> Node {
    Controller::new(
        "ctl001",
        "region-1",
        NodeType::RegionAndRackController,
        NodeStatus::Deployed,
    )
    .with_actions(actions.iter().copied())
    .into()
}

pub fn device(actions: &[NodeAction]) -> Node {
    Device::new("dev001", "printer", NodeStatus::Deployed)
        .with_actions(actions.iter().copied())
        .into()
}

/// One node of each known variant, advertising `actions`, in every status.
pub fn all_nodes(actions: &[NodeAction]) -> Vec<Node> {
    let mut nodes: Vec<Node> = NodeStatus::ALL
        .into_iter()
        .map(|status| machine(status, actions))
        .collect();
    nodes.push(controller(actions));
    nodes.push(device(actions));
    nodes
}
