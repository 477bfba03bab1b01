use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings read from the optional TOML config file. Flags on the command line win.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Title used by `title` when no `--default` is given.
    pub default_title: String,
    pub output: OutputFormat,
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_title: "Machines".to_string(),
            output: OutputFormat::Text,
            log_filter: "warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads the config at `path`, or the defaults when no path is given or the
    /// file does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Toml {
            path: path.display().to_string(),
            source,
        })
    }

    fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
