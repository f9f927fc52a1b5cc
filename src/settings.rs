//! Settings file for the `apikey` tool.
//!
//! ```yaml
//! log_level: debug
//! api_key:
//!   prefix: short
//!   entropy_length: 50
//!   checksum_length: 8
//! ```

use std::io::ErrorKind;
use std::path::Path;

use api_key::ApiKeyConfig;
use serde::Deserialize;

use crate::error::CliError;

pub const DEFAULT_SETTINGS_PATH: &str = "api-key.yaml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// env_logger filter used when `RUST_LOG` is unset.
    pub log_level: Option<String>,
    pub api_key: ApiKeyConfig,
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_yaml(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(CliError::ReadSettings {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_yaml(contents: &str) -> Result<Self, CliError> {
        // An empty document deserializes to unit, not to a map
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }
}
