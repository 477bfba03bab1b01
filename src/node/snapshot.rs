use super::model::Node;
use crate::error::SnapshotError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A list of node records as returned by the backend, cached for offline use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub nodes: Vec<Node>,
}

impl NodeSnapshot {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Parses a snapshot from JSON. Accepts either `{"nodes": [...]}` or a bare array.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        // Pick the form from the top-level shape; a struct also accepts a sequence,
        // which would hide the real error behind "expected a sequence".
        let snapshot = if json.trim_start().starts_with('[') {
            Self::new(serde_json::from_str::<Vec<Node>>(json)?)
        } else {
            serde_json::from_str::<NodeSnapshot>(json)?
        };
        tracing::debug!(nodes = snapshot.nodes.len(), "parsed node snapshot");
        Ok(snapshot)
    }

    /// Loads a snapshot from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loading node snapshot");
        Self::from_json(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Finds a node by its system id.
    pub fn find(&self, system_id: &str) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|node| node.system_id() == Some(system_id))
    }
}
