use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An operation a user may request against a node.
///
/// Not every action applies to every node variant; the backend advertises the
/// subset that is currently valid for a node in its `actions` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeAction {
    Abort,
    Acquire,
    CheckPower,
    Clone,
    Commission,
    Delete,
    Deploy,
    ExitRescueMode,
    ImportImages,
    Lock,
    MarkBroken,
    MarkFixed,
    Off,
    On,
    SoftOff,
    OverrideFailedTesting,
    Release,
    RescueMode,
    SetPool,
    SetZone,
    Tag,
    Untag,
    Test,
    Unlock,
}

impl NodeAction {
    /// Every action, in the order menus list them.
    pub const ALL: [NodeAction; 24] = [
        NodeAction::Abort,
        NodeAction::Acquire,
        NodeAction::CheckPower,
        NodeAction::Clone,
        NodeAction::Commission,
        NodeAction::Delete,
        NodeAction::Deploy,
        NodeAction::ExitRescueMode,
        NodeAction::ImportImages,
        NodeAction::Lock,
        NodeAction::MarkBroken,
        NodeAction::MarkFixed,
        NodeAction::Off,
        NodeAction::On,
        NodeAction::SoftOff,
        NodeAction::OverrideFailedTesting,
        NodeAction::Release,
        NodeAction::RescueMode,
        NodeAction::SetPool,
        NodeAction::SetZone,
        NodeAction::Tag,
        NodeAction::Untag,
        NodeAction::Test,
        NodeAction::Unlock,
    ];

    /// The wire name the backend uses for this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeAction::Abort => "abort",
            NodeAction::Acquire => "acquire",
            NodeAction::CheckPower => "check-power",
            NodeAction::Clone => "clone",
            NodeAction::Commission => "commission",
            NodeAction::Delete => "delete",
            NodeAction::Deploy => "deploy",
            NodeAction::ExitRescueMode => "exit-rescue-mode",
            NodeAction::ImportImages => "import-images",
            NodeAction::Lock => "lock",
            NodeAction::MarkBroken => "mark-broken",
            NodeAction::MarkFixed => "mark-fixed",
            NodeAction::Off => "off",
            NodeAction::On => "on",
            NodeAction::SoftOff => "soft-off",
            NodeAction::OverrideFailedTesting => "override-failed-testing",
            NodeAction::Release => "release",
            NodeAction::RescueMode => "rescue-mode",
            NodeAction::SetPool => "set-pool",
            NodeAction::SetZone => "set-zone",
            NodeAction::Tag => "tag",
            NodeAction::Untag => "untag",
            NodeAction::Test => "test",
            NodeAction::Unlock => "unlock",
        }
    }
}

impl fmt::Display for NodeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeAction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ParseError::UnknownAction(s.to_string()))
    }
}

/// Actions on KVM hosts. They share the label formatter with node actions but
/// are never advertised on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PodAction {
    Compose,
    Refresh,
    Remove,
}

impl PodAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PodAction::Compose => "compose",
            PodAction::Refresh => "refresh",
            PodAction::Remove => "remove",
        }
    }
}

impl FromStr for PodAction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compose" => Ok(PodAction::Compose),
            "refresh" => Ok(PodAction::Refresh),
            "remove" => Ok(PodAction::Remove),
            other => Err(ParseError::UnknownAction(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_serde() {
        for action in NodeAction::ALL {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.as_str()));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!("deploy".parse::<NodeAction>(), Ok(NodeAction::Deploy));
        assert_eq!(
            "exit-rescue-mode".parse::<NodeAction>(),
            Ok(NodeAction::ExitRescueMode)
        );
        assert_eq!(
            "Deploy".parse::<NodeAction>(),
            Err(ParseError::UnknownAction("Deploy".to_string()))
        );
        assert!("compose".parse::<NodeAction>().is_err());
        assert_eq!("compose".parse::<PodAction>(), Ok(PodAction::Compose));
    }
}
