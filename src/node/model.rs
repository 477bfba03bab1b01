use super::action::NodeAction;
use super::kind::{NodeLinkType, NodeType};
use super::status::NodeStatus;
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Deserializer, Serialize};

/// A managed infrastructure entity, discriminated by its `link_type` tag.
///
/// The variant is fixed when the record is created or deserialized; there is no
/// way to turn a `Machine` into a `Controller` after the fact. Records carrying a
/// tag this crate does not recognise deserialize as [`Node::Unknown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "link_type", rename_all = "lowercase")]
pub enum Node {
    Controller(Controller),
    Device(Device),
    Machine(Machine),
    #[serde(other)]
    Unknown,
}

impl Node {
    pub fn link_type(&self) -> NodeLinkType {
        match self {
            Node::Controller(_) => NodeLinkType::Controller,
            Node::Device(_) => NodeLinkType::Device,
            Node::Machine(_) => NodeLinkType::Machine,
            Node::Unknown => NodeLinkType::Unknown,
        }
    }

    pub fn system_id(&self) -> Option<&str> {
        match self {
            Node::Controller(c) => Some(&c.system_id),
            Node::Device(d) => Some(&d.system_id),
            Node::Machine(m) => Some(&m.system_id),
            Node::Unknown => None,
        }
    }

    pub fn hostname(&self) -> Option<&str> {
        match self {
            Node::Controller(c) => Some(&c.hostname),
            Node::Device(d) => Some(&d.hostname),
            Node::Machine(m) => Some(&m.hostname),
            Node::Unknown => None,
        }
    }

    pub fn status(&self) -> Option<NodeStatus> {
        match self {
            Node::Controller(c) => Some(c.status),
            Node::Device(d) => Some(d.status),
            Node::Machine(m) => Some(m.status),
            Node::Unknown => None,
        }
    }

    pub fn node_type(&self) -> Option<NodeType> {
        match self {
            Node::Controller(c) => Some(c.node_type),
            Node::Device(_) => Some(NodeType::Device),
            Node::Machine(_) => Some(NodeType::Machine),
            Node::Unknown => None,
        }
    }

    /// The actions the backend currently advertises for this node.
    pub fn actions(&self) -> Option<&AHashSet<NodeAction>> {
        match self {
            Node::Controller(c) => Some(&c.actions),
            Node::Device(d) => Some(&d.actions),
            Node::Machine(m) => Some(&m.actions),
            Node::Unknown => None,
        }
    }
}

impl From<Controller> for Node {
    fn from(controller: Controller) -> Self {
        Node::Controller(controller)
    }
}

impl From<Device> for Node {
    fn from(device: Device) -> Self {
        Node::Device(device)
    }
}

impl From<Machine> for Node {
    fn from(machine: Machine) -> Self {
        Node::Machine(machine)
    }
}

/// Reads the advertised action list, skipping names this crate does not know so
/// that a newer backend cannot make the whole record unreadable.
fn advertised_actions<'de, D>(deserializer: D) -> Result<AHashSet<NodeAction>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = Vec::<String>::deserialize(deserializer)?;
    Ok(names
        .into_iter()
        .filter_map(|name| match name.parse::<NodeAction>() {
            Ok(action) => Some(action),
            Err(e) => {
                tracing::debug!(error = %e, "skipping advertised action");
                None
            }
        })
        .collect())
}

/// Power state reported for a machine's BMC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    On,
    Off,
    Error,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub system_id: String,
    pub hostname: String,
    #[serde(default)]
    pub fqdn: String,
    pub status: NodeStatus,
    #[serde(default, deserialize_with = "advertised_actions")]
    pub actions: AHashSet<NodeAction>,
    #[serde(default)]
    pub power_state: PowerState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<MachineDetails>,
}

impl Machine {
    pub fn new(system_id: impl Into<String>, hostname: impl Into<String>, status: NodeStatus) -> Self {
        let hostname = hostname.into();
        Self {
            system_id: system_id.into(),
            fqdn: hostname.clone(),
            hostname,
            status,
            actions: AHashSet::new(),
            power_state: PowerState::Unknown,
            pool: None,
            zone: None,
            details: None,
        }
    }

    pub fn with_actions(mut self, actions: impl IntoIterator<Item = NodeAction>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }

    pub fn with_details(mut self, details: MachineDetails) -> Self {
        self.details = Some(details);
        self
    }
}

/// Fields only present when the full machine record has been fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineDetails {
    #[serde(default)]
    pub osystem: String,
    #[serde(default)]
    pub distro_series: String,
    #[serde(default)]
    pub cpu_count: u32,
    /// Memory in GiB.
    #[serde(default)]
    pub memory: f64,
    #[serde(default)]
    pub workload_annotations: AHashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Controller {
    pub system_id: String,
    pub hostname: String,
    #[serde(default)]
    pub fqdn: String,
    pub node_type: NodeType,
    pub status: NodeStatus,
    #[serde(default, deserialize_with = "advertised_actions")]
    pub actions: AHashSet<NodeAction>,
    #[serde(default)]
    pub service_ids: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ControllerDetails>,
}

impl Controller {
    pub fn new(
        system_id: impl Into<String>,
        hostname: impl Into<String>,
        node_type: NodeType,
        status: NodeStatus,
    ) -> Self {
        let hostname = hostname.into();
        Self {
            system_id: system_id.into(),
            fqdn: hostname.clone(),
            hostname,
            node_type,
            status,
            actions: AHashSet::new(),
            service_ids: Vec::new(),
            details: None,
        }
    }

    pub fn with_actions(mut self, actions: impl IntoIterator<Item = NodeAction>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }

    pub fn with_details(mut self, details: ControllerDetails) -> Self {
        self.details = Some(details);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub vlan_ids: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub system_id: String,
    pub hostname: String,
    #[serde(default)]
    pub fqdn: String,
    pub status: NodeStatus,
    #[serde(default, deserialize_with = "advertised_actions")]
    pub actions: AHashSet<NodeAction>,
    #[serde(default)]
    pub primary_mac: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<DeviceDetails>,
}

impl Device {
    pub fn new(system_id: impl Into<String>, hostname: impl Into<String>, status: NodeStatus) -> Self {
        let hostname = hostname.into();
        Self {
            system_id: system_id.into(),
            fqdn: hostname.clone(),
            hostname,
            status,
            actions: AHashSet::new(),
            primary_mac: String::new(),
            details: None,
        }
    }

    pub fn with_actions(mut self, actions: impl IntoIterator<Item = NodeAction>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }

    pub fn with_details(mut self, details: DeviceDetails) -> Self {
        self.details = Some(details);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default)]
    pub ip_addresses: Vec<String>,
}
