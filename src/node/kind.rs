use crate::error::ParseError;
use serde::{Deserialize, Serialize};

/// The `link_type` tag that discriminates node records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeLinkType {
    Controller,
    Device,
    Machine,
    #[serde(other)]
    Unknown,
}

/// The numeric node type reported by the backend.
///
/// Unlike [`NodeLinkType`], this distinguishes the three controller roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum NodeType {
    Machine,
    Device,
    RackController,
    RegionController,
    RegionAndRackController,
}

impl NodeType {
    /// The type a node takes when the backend does not report one.
    pub const DEFAULT: NodeType = NodeType::Machine;

    pub fn code(&self) -> u8 {
        match self {
            NodeType::Machine => 0,
            NodeType::Device => 1,
            NodeType::RackController => 2,
            NodeType::RegionController => 3,
            NodeType::RegionAndRackController => 4,
        }
    }

    pub fn is_controller(&self) -> bool {
        matches!(
            self,
            NodeType::RackController
                | NodeType::RegionController
                | NodeType::RegionAndRackController
        )
    }
}

impl Default for NodeType {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for NodeType {
    type Error = ParseError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(NodeType::Machine),
            1 => Ok(NodeType::Device),
            2 => Ok(NodeType::RackController),
            3 => Ok(NodeType::RegionController),
            4 => Ok(NodeType::RegionAndRackController),
            other => Err(ParseError::UnknownNodeType(other)),
        }
    }
}

impl From<NodeType> for u8 {
    fn from(node_type: NodeType) -> Self {
        node_type.code()
    }
}

/// The concrete variant of a node, as determined by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Controller,
    Device,
    Machine,
    Unknown,
}

impl From<NodeLinkType> for NodeKind {
    fn from(link_type: NodeLinkType) -> Self {
        match link_type {
            NodeLinkType::Controller => NodeKind::Controller,
            NodeLinkType::Device => NodeKind::Device,
            NodeLinkType::Machine => NodeKind::Machine,
            NodeLinkType::Unknown => NodeKind::Unknown,
        }
    }
}
