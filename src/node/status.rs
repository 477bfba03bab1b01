use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle stage of a node, serialized by its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeStatus {
    #[serde(rename = "New")]
    New,
    #[serde(rename = "Commissioning")]
    Commissioning,
    #[serde(rename = "Failed commissioning")]
    FailedCommissioning,
    #[serde(rename = "Missing")]
    Missing,
    #[serde(rename = "Ready")]
    Ready,
    #[serde(rename = "Reserved")]
    Reserved,
    #[serde(rename = "Allocated")]
    Allocated,
    #[serde(rename = "Deploying")]
    Deploying,
    #[serde(rename = "Deployed")]
    Deployed,
    #[serde(rename = "Retired")]
    Retired,
    #[serde(rename = "Broken")]
    Broken,
    #[serde(rename = "Failed deployment")]
    FailedDeployment,
    #[serde(rename = "Releasing")]
    Releasing,
    #[serde(rename = "Releasing failed")]
    FailedReleasing,
    #[serde(rename = "Disk erasing")]
    DiskErasing,
    #[serde(rename = "Failed disk erasing")]
    FailedDiskErasing,
    #[serde(rename = "Rescue mode")]
    RescueMode,
    #[serde(rename = "Entering rescue mode")]
    EnteringRescueMode,
    #[serde(rename = "Failed to enter rescue mode")]
    FailedEnteringRescueMode,
    #[serde(rename = "Exiting rescue mode")]
    ExitingRescueMode,
    #[serde(rename = "Failed to exit rescue mode")]
    FailedExitingRescueMode,
    #[serde(rename = "Testing")]
    Testing,
    #[serde(rename = "Failed testing")]
    FailedTesting,
}

impl NodeStatus {
    /// Every status, ordered by backend status code.
    pub const ALL: [NodeStatus; 23] = [
        NodeStatus::New,
        NodeStatus::Commissioning,
        NodeStatus::FailedCommissioning,
        NodeStatus::Missing,
        NodeStatus::Ready,
        NodeStatus::Reserved,
        NodeStatus::Deployed,
        NodeStatus::Retired,
        NodeStatus::Broken,
        NodeStatus::Deploying,
        NodeStatus::Allocated,
        NodeStatus::FailedDeployment,
        NodeStatus::Releasing,
        NodeStatus::FailedReleasing,
        NodeStatus::DiskErasing,
        NodeStatus::FailedDiskErasing,
        NodeStatus::RescueMode,
        NodeStatus::EnteringRescueMode,
        NodeStatus::FailedEnteringRescueMode,
        NodeStatus::ExitingRescueMode,
        NodeStatus::FailedExitingRescueMode,
        NodeStatus::Testing,
        NodeStatus::FailedTesting,
    ];

    /// The human-readable name, identical to the serialized form.
    pub fn display_name(&self) -> &'static str {
        match self {
            NodeStatus::New => "New",
            NodeStatus::Commissioning => "Commissioning",
            NodeStatus::FailedCommissioning => "Failed commissioning",
            NodeStatus::Missing => "Missing",
            NodeStatus::Ready => "Ready",
            NodeStatus::Reserved => "Reserved",
            NodeStatus::Allocated => "Allocated",
            NodeStatus::Deploying => "Deploying",
            NodeStatus::Deployed => "Deployed",
            NodeStatus::Retired => "Retired",
            NodeStatus::Broken => "Broken",
            NodeStatus::FailedDeployment => "Failed deployment",
            NodeStatus::Releasing => "Releasing",
            NodeStatus::FailedReleasing => "Releasing failed",
            NodeStatus::DiskErasing => "Disk erasing",
            NodeStatus::FailedDiskErasing => "Failed disk erasing",
            NodeStatus::RescueMode => "Rescue mode",
            NodeStatus::EnteringRescueMode => "Entering rescue mode",
            NodeStatus::FailedEnteringRescueMode => "Failed to enter rescue mode",
            NodeStatus::ExitingRescueMode => "Exiting rescue mode",
            NodeStatus::FailedExitingRescueMode => "Failed to exit rescue mode",
            NodeStatus::Testing => "Testing",
            NodeStatus::FailedTesting => "Failed testing",
        }
    }

    /// The numeric status code the backend stores alongside the name.
    pub fn code(&self) -> u8 {
        // ALL is ordered by code, so the index is the code.
        Self::ALL
            .iter()
            .position(|status| status == self)
            .map_or(0, |idx| idx as u8)
    }

    pub fn from_code(code: u8) -> Result<Self, ParseError> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(ParseError::UnknownStatusCode(code))
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for NodeStatus {
    type Err = ParseError;

    /// Accepts the display name ("Failed testing") or the snake_case
    /// identifier ("failed_testing").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        NodeStatus::ALL
            .into_iter()
            .find(|status| status.display_name().to_lowercase() == normalized)
            .ok_or_else(|| ParseError::UnknownStatus(s.to_string()))
    }
}
