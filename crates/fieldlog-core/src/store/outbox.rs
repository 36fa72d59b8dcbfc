//! Durable queue of pending sync work, decoupled from the record store.

use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use crate::error::Result;
use crate::models::{ObservationId, OutboxItem};
use crate::store::{read_document, write_document, OUTBOX_FILE};

/// Durable outbox of observation ids awaiting sync.
///
/// Entries are unique per observation id: enqueueing an id that is already
/// queued is a no-op, so a retried save cannot accumulate duplicates.
pub struct OutboxStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl OutboxStore {
    /// Open the store rooted at the given data directory.
    #[must_use]
    pub fn open(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(OUTBOX_FILE),
            lock: Mutex::new(()),
        }
    }

    /// Queue an observation for sync. No-op when the id is already queued.
    pub async fn enqueue(&self, observation_id: ObservationId) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        if items.iter().any(|item| item.observation_id == observation_id) {
            tracing::debug!(%observation_id, "outbox entry already queued, skipping enqueue");
            return Ok(());
        }
        items.push(OutboxItem::new(observation_id));
        write_document(&self.path, &items).await
    }

    /// All queued items, timestamps fully deserialized.
    pub async fn get_all(&self) -> Result<Vec<OutboxItem>> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// Remove every entry for the given observation id. Silent no-op when
    /// none match.
    pub async fn remove(&self, observation_id: ObservationId) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        let before = items.len();
        items.retain(|item| item.observation_id != observation_id);
        if items.len() == before {
            return Ok(());
        }
        write_document(&self.path, &items).await
    }

    /// Bump the retry counter for the given observation id. Silent no-op
    /// when no entry matches.
    pub async fn increment_retry(&self, observation_id: ObservationId) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        let Some(item) = items
            .iter_mut()
            .find(|item| item.observation_id == observation_id)
        else {
            return Ok(());
        };
        item.retry_count += 1;
        write_document(&self.path, &items).await
    }

    async fn load(&self) -> Result<Vec<OutboxItem>> {
        Ok(read_document(&self.path).await?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn enqueue_adds_item_with_zero_retries() {
        let dir = tempfile::tempdir().unwrap();
        let store = OutboxStore::open(dir.path());

        let id = ObservationId::new();
        store.enqueue(id).await.unwrap();

        let items = store.get_all().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].observation_id, id);
        assert_eq!(items[0].retry_count, 0);
    }

    #[tokio::test]
    async fn enqueue_is_idempotent_per_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = OutboxStore::open(dir.path());

        let id = ObservationId::new();
        store.enqueue(id).await.unwrap();
        store.enqueue(id).await.unwrap();

        assert_eq!(store.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn remove_deletes_matching_entry_only() {
        let dir = tempfile::tempdir().unwrap();
        let store = OutboxStore::open(dir.path());

        let kept = ObservationId::new();
        let removed = ObservationId::new();
        store.enqueue(kept).await.unwrap();
        store.enqueue(removed).await.unwrap();

        store.remove(removed).await.unwrap();
        store.remove(ObservationId::new()).await.unwrap();

        let items = store.get_all().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].observation_id, kept);
    }

    #[tokio::test]
    async fn increment_retry_bumps_only_the_match() {
        let dir = tempfile::tempdir().unwrap();
        let store = OutboxStore::open(dir.path());

        let failing = ObservationId::new();
        let other = ObservationId::new();
        store.enqueue(failing).await.unwrap();
        store.enqueue(other).await.unwrap();

        store.increment_retry(failing).await.unwrap();
        store.increment_retry(failing).await.unwrap();
        store.increment_retry(ObservationId::new()).await.unwrap();

        let items = store.get_all().await.unwrap();
        let failing_item = items
            .iter()
            .find(|item| item.observation_id == failing)
            .unwrap();
        let other_item = items
            .iter()
            .find(|item| item.observation_id == other)
            .unwrap();
        assert_eq!(failing_item.retry_count, 2);
        assert_eq!(other_item.retry_count, 0);
    }
}
