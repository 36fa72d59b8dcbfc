//! Local persistence: one JSON document per namespace.
//!
//! Volumes are small (hundreds of records), so every mutation is a
//! full-collection read-modify-write guarded by a per-store mutex. The
//! design assumes a single logical writer per process; there is no
//! cross-process locking.

mod observations;
mod outbox;
mod settings;

use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

pub use observations::ObservationStore;
pub use outbox::OutboxStore;
pub use settings::SettingsStore;

/// File name of the observations namespace
pub const OBSERVATIONS_FILE: &str = "observations.json";
/// File name of the outbox namespace
pub const OUTBOX_FILE: &str = "outbox.json";
/// File name of the user settings namespace
pub const SETTINGS_FILE: &str = "settings.json";

/// Read a JSON document, returning `None` when the file does not exist yet.
async fn read_document<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
        Err(error) => return Err(error.into()),
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Write a JSON document, creating the parent directory when needed.
async fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let serialized = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, serialized).await?;
    Ok(())
}
