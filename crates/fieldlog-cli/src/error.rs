use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] fieldlog_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Observation ID is not valid: {0}")]
    InvalidObservationId(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error(
        "Remote sync is not configured. Run `fieldlog config set --token <TOKEN> --repo <OWNER/NAME>`, or set FIELDLOG_GITHUB_TOKEN and FIELDLOG_GITHUB_REPO."
    )]
    RemoteNotConfigured,
    #[error("Could not resolve a data directory; pass --data-dir")]
    NoDataDir,
}
