//! Durable store of observation records, keyed by id.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::models::{Observation, ObservationId};
use crate::store::{read_document, write_document, OBSERVATIONS_FILE};

/// Durable local store of observation records.
///
/// Records are kept in insertion order. Mutations serialize on an internal
/// mutex; readers take the same lock so they never observe a torn
/// read-modify-write.
pub struct ObservationStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ObservationStore {
    /// Open the store rooted at the given data directory.
    #[must_use]
    pub fn open(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(OBSERVATIONS_FILE),
            lock: Mutex::new(()),
        }
    }

    /// Insert or replace the record with the same id.
    pub async fn upsert(&self, observation: &Observation) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;
        match records.iter_mut().find(|record| record.id == observation.id) {
            Some(existing) => *existing = observation.clone(),
            None => records.push(observation.clone()),
        }
        write_document(&self.path, &records).await
    }

    /// All records in insertion order, timestamps fully deserialized.
    pub async fn get_all(&self) -> Result<Vec<Observation>> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// Records not yet confirmed by the remote store.
    pub async fn get_unsynced(&self) -> Result<Vec<Observation>> {
        let _guard = self.lock.lock().await;
        let records = self.load().await?;
        Ok(records.into_iter().filter(|record| !record.synced).collect())
    }

    /// Mark a record as confirmed synced. Silent no-op when the id is
    /// unknown.
    pub async fn mark_synced(&self, id: ObservationId) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;
        let Some(record) = records.iter_mut().find(|record| record.id == id) else {
            return Ok(());
        };
        record.synced = true;
        write_document(&self.path, &records).await
    }

    /// Record a failed sync attempt: overwrite the error message and stamp
    /// the attempt time. Silent no-op when the id is unknown.
    pub async fn record_sync_error(&self, id: ObservationId, message: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;
        let Some(record) = records.iter_mut().find(|record| record.id == id) else {
            return Ok(());
        };
        record.sync_error = Some(message.to_string());
        record.sync_attempted = Some(Utc::now());
        write_document(&self.path, &records).await
    }

    async fn load(&self) -> Result<Vec<Observation>> {
        Ok(read_document(&self.path).await?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoPoint;

    fn sample(species: &str) -> Observation {
        Observation::new(
            species,
            vec![],
            "Jono",
            GeoPoint::new(45.1, -75.2, None, None).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn upsert_appends_then_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let store = ObservationStore::open(dir.path());

        let mut obs = sample("Red Fox");
        store.upsert(&obs).await.unwrap();
        obs.species = "Arctic Fox".to_string();
        store.upsert(&obs).await.unwrap();

        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].species, "Arctic Fox");
    }

    #[tokio::test]
    async fn get_all_preserves_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = ObservationStore::open(dir.path());

        let first = sample("Moose");
        let second = sample("Lynx");
        store.upsert(&first).await.unwrap();
        store.upsert(&second).await.unwrap();

        let all = store.get_all().await.unwrap();
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[1].id, second.id);
    }

    #[tokio::test]
    async fn get_all_on_empty_store_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ObservationStore::open(dir.path());
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn mark_synced_flips_flag_and_ignores_unknown_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = ObservationStore::open(dir.path());

        let obs = sample("Bobcat");
        store.upsert(&obs).await.unwrap();
        store.mark_synced(obs.id).await.unwrap();
        store.mark_synced(ObservationId::new()).await.unwrap();

        let all = store.get_all().await.unwrap();
        assert!(all[0].synced);
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn get_unsynced_filters_synced_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = ObservationStore::open(dir.path());

        let synced = sample("Moose");
        let pending = sample("Lynx");
        store.upsert(&synced).await.unwrap();
        store.upsert(&pending).await.unwrap();
        store.mark_synced(synced.id).await.unwrap();

        let unsynced = store.get_unsynced().await.unwrap();
        assert_eq!(unsynced.len(), 1);
        assert_eq!(unsynced[0].id, pending.id);
    }

    #[tokio::test]
    async fn record_sync_error_sets_message_and_attempt_time() {
        let dir = tempfile::tempdir().unwrap();
        let store = ObservationStore::open(dir.path());

        let obs = sample("Fisher");
        store.upsert(&obs).await.unwrap();
        store
            .record_sync_error(obs.id, "GitHub API error: 401 - Bad credentials")
            .await
            .unwrap();

        let stored = &store.get_all().await.unwrap()[0];
        assert_eq!(
            stored.sync_error.as_deref(),
            Some("GitHub API error: 401 - Bad credentials")
        );
        assert!(stored.sync_attempted.is_some());
        assert!(!stored.synced);
    }

    #[tokio::test]
    async fn timestamps_survive_a_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ObservationStore::open(dir.path());

        let obs = sample("Red Fox");
        store.upsert(&obs).await.unwrap();

        let reopened = ObservationStore::open(dir.path());
        let all = reopened.get_all().await.unwrap();
        assert_eq!(all[0].timestamp, obs.timestamp);
    }
}
