//! Sync orchestrator: drains the outbox against the remote store.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{Error, Result};
use crate::net::Connectivity;
use crate::remote::RemoteStore;
use crate::store::{ObservationStore, OutboxStore};

/// Aggregate outcome of one `sync_all` batch, covering every item
/// attempted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct SyncReport {
    pub success: usize,
    pub failed: usize,
}

/// Drives unsynced records through the remote store one at a time.
///
/// Items are processed sequentially, never concurrently, to avoid remote
/// rate-limit amplification and to keep retry bookkeeping simple. A
/// process-wide guard rejects overlapping batches with
/// [`Error::SyncBusy`], so two callers can never issue two upserts for the
/// same observation.
pub struct SyncEngine<R, C> {
    records: Arc<ObservationStore>,
    outbox: Arc<OutboxStore>,
    remote: R,
    probe: C,
    in_flight: Mutex<()>,
}

impl<R, C> SyncEngine<R, C>
where
    R: RemoteStore,
    C: Connectivity,
{
    /// Build an engine over explicit store handles. Remote credentials are
    /// validated when the remote client is constructed, before any batch
    /// can start.
    pub fn new(
        records: Arc<ObservationStore>,
        outbox: Arc<OutboxStore>,
        remote: R,
        probe: C,
    ) -> Self {
        Self {
            records,
            outbox,
            remote,
            probe,
            in_flight: Mutex::new(()),
        }
    }

    /// Attempt to sync every record that is unsynced at call start, exactly
    /// once each.
    ///
    /// Fails fast with [`Error::SyncBusy`] when a batch is already in
    /// flight and with [`Error::Offline`] when the connectivity probe
    /// reports not-online; both checks happen before any remote call or
    /// store mutation. Per-item remote failures are persisted
    /// (`sync_error`, retry counter) and never abort the batch; store-level
    /// faults propagate. There is no mid-batch cancellation.
    pub async fn sync_all(&self) -> Result<SyncReport> {
        let _guard = self.in_flight.try_lock().map_err(|_| Error::SyncBusy)?;

        if !self.probe.is_online().await {
            return Err(Error::Offline);
        }

        self.prune_stale_outbox_entries().await?;

        let pending = self.records.get_unsynced().await?;
        tracing::info!(pending = pending.len(), "starting sync batch");

        let mut report = SyncReport::default();
        for observation in pending {
            match self.remote.upsert(&observation).await {
                Ok(()) => {
                    // Two-step update, not a transaction; a crash between
                    // the steps is healed by the pruning pass above.
                    self.records.mark_synced(observation.id).await?;
                    self.outbox.remove(observation.id).await?;
                    report.success += 1;
                    tracing::debug!(id = %observation.id, "observation synced");
                }
                Err(error) => {
                    tracing::warn!(id = %observation.id, %error, "observation sync failed");
                    self.records
                        .record_sync_error(observation.id, &error.to_string())
                        .await?;
                    self.outbox.increment_retry(observation.id).await?;
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            success = report.success,
            failed = report.failed,
            "sync batch finished"
        );
        Ok(report)
    }

    /// Drop outbox entries whose observation is already synced or no
    /// longer exists. Such entries are left behind when a previous batch
    /// crashed between marking a record synced and removing its entry.
    async fn prune_stale_outbox_entries(&self) -> Result<()> {
        let records = self.records.get_all().await?;
        for item in self.outbox.get_all().await? {
            let record = records
                .iter()
                .find(|record| record.id == item.observation_id);
            let stale = record.map_or(true, |record| record.synced);
            if stale {
                tracing::debug!(id = %item.observation_id, "removing stale outbox entry");
                self.outbox.remove(item.observation_id).await?;
            }
        }
        Ok(())
    }
}
