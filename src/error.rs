use thiserror::Error;

/// Errors that can occur when parsing a backend identifier into one of the typed enums.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown node action: '{0}'")]
    UnknownAction(String),

    #[error("Unknown node status: '{0}'")]
    UnknownStatus(String),

    #[error("Unknown node status code: {0}")]
    UnknownStatusCode(u8),

    #[error("Unknown node type code: {0}")]
    UnknownNodeType(u8),

    #[error("Unknown service status: '{0}'")]
    UnknownServiceStatus(String),
}

/// Errors that can occur while loading or writing a node snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Could not read snapshot file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}
