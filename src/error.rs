use std::path::PathBuf;

use api_key::{ApiKeyError, Base62Error};
use thiserror::Error;

/// Errors surfaced by the command line tool.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read settings {path:?}: {source}")]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    ParseSettings(#[from] serde_yaml::Error),

    #[error(transparent)]
    ApiKey(#[from] ApiKeyError),

    #[error(transparent)]
    Base62(#[from] Base62Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
