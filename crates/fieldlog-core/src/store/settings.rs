//! User settings persistence.

use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use crate::error::Result;
use crate::models::UserSettings;
use crate::store::{read_document, write_document, SETTINGS_FILE};

/// Store for the single `UserSettings` record.
pub struct SettingsStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SettingsStore {
    /// Open the store rooted at the given data directory.
    #[must_use]
    pub fn open(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(SETTINGS_FILE),
            lock: Mutex::new(()),
        }
    }

    /// Load settings; `None` when nothing has been saved yet.
    pub async fn load(&self) -> Result<Option<UserSettings>> {
        let _guard = self.lock.lock().await;
        read_document(&self.path).await
    }

    /// Replace the stored settings.
    pub async fn save(&self, settings: &UserSettings) -> Result<()> {
        let _guard = self.lock.lock().await;
        write_document(&self.path, settings).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_before_save_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::open(dir.path());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::open(dir.path());

        store
            .save(&UserSettings {
                enumerator: "Jono".to_string(),
            })
            .await
            .unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.enumerator, "Jono");
    }
}
