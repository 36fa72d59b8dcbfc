//! Capture flow: one logical save across the record store and the outbox.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::{GeoPoint, Observation, UserSettings};
use crate::store::{ObservationStore, OutboxStore, SettingsStore};
use crate::util::normalize_text_option;

/// Input for a new observation, as collected by the capture surface.
#[derive(Debug, Clone)]
pub struct ObservationDraft {
    pub species: String,
    pub items: Vec<String>,
    /// Recorder name; prefilled from settings when omitted
    pub enumerator: Option<String>,
    pub location: GeoPoint,
}

/// Saves new observations: record store upsert plus outbox enqueue, with
/// enumerator prefill from user settings.
#[derive(Clone)]
pub struct CaptureService {
    records: Arc<ObservationStore>,
    outbox: Arc<OutboxStore>,
    settings: Arc<SettingsStore>,
}

impl CaptureService {
    pub fn new(
        records: Arc<ObservationStore>,
        outbox: Arc<OutboxStore>,
        settings: Arc<SettingsStore>,
    ) -> Self {
        Self {
            records,
            outbox,
            settings,
        }
    }

    /// Persist a draft as a new unsynced observation and queue it for
    /// sync. The enumerator falls back to the last-used name; the name
    /// actually used is stored back for the next prefill.
    pub async fn save(&self, draft: ObservationDraft) -> Result<Observation> {
        let enumerator = match normalize_text_option(draft.enumerator) {
            Some(name) => name,
            None => self
                .settings
                .load()
                .await?
                .and_then(|settings| normalize_text_option(Some(settings.enumerator)))
                .ok_or_else(|| {
                    Error::InvalidInput(
                        "enumerator required: none given and no last-used name stored".to_string(),
                    )
                })?,
        };

        let observation =
            Observation::new(draft.species, draft.items, enumerator.clone(), draft.location)?;

        self.records.upsert(&observation).await?;
        self.outbox.enqueue(observation.id).await?;
        self.settings.save(&UserSettings { enumerator }).await?;

        tracing::info!(id = %observation.id, species = %observation.species, "observation saved");
        Ok(observation)
    }
}
