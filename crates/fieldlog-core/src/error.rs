//! Error types for fieldlog-core

use thiserror::Error;

/// Result type alias using fieldlog-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fieldlog-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Remote configuration is missing or invalid; not retried
    /// automatically, the user has to fix settings first.
    #[error("Remote configuration error: {0}")]
    Config(String),

    /// Connectivity probe reported not-online; retry on the next save
    /// or app foreground.
    #[error("No internet connection")]
    Offline,

    /// A sync batch is already in flight.
    #[error("Sync already in progress")]
    SyncBusy,

    /// The remote store rejected a write (auth, conflict, rate limit,
    /// validation). Retried via the outbox retry counter.
    #[error("Remote error ({status}): {message}")]
    Remote { status: u16, message: String },

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
