use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use fieldlog_core::models::{Observation, ObservationId, OutboxItem};
use fieldlog_core::store::{ObservationStore, OutboxStore, SettingsStore};

use crate::error::CliError;

/// Handles to the three local namespaces, opened under one data directory.
pub struct Stores {
    pub records: Arc<ObservationStore>,
    pub outbox: Arc<OutboxStore>,
    pub settings: Arc<SettingsStore>,
}

pub fn open_stores(data_dir: &Path) -> Stores {
    Stores {
        records: Arc::new(ObservationStore::open(data_dir)),
        outbox: Arc::new(OutboxStore::open(data_dir)),
        settings: Arc::new(SettingsStore::open(data_dir)),
    }
}

/// Explicit flag wins; otherwise the platform data directory.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf, CliError> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    dirs::data_dir()
        .map(|dir| dir.join("fieldlog"))
        .ok_or(CliError::NoDataDir)
}

pub fn parse_observation_id(raw: &str) -> Result<ObservationId, CliError> {
    raw.trim()
        .parse()
        .map_err(|_| CliError::InvalidObservationId(raw.trim().to_string()))
}

#[derive(Debug, Serialize)]
pub struct ObservationListItem {
    pub id: String,
    pub species: String,
    pub items: Vec<String>,
    pub enumerator: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: String,
    pub synced: bool,
    pub sync_error: Option<String>,
}

pub fn observation_to_list_item(observation: &Observation) -> ObservationListItem {
    ObservationListItem {
        id: observation.id.as_str(),
        species: observation.species.clone(),
        items: observation.items.clone(),
        enumerator: observation.enumerator.clone(),
        latitude: observation.location.latitude,
        longitude: observation.location.longitude,
        timestamp: observation.timestamp.to_rfc3339(),
        synced: observation.synced,
        sync_error: observation.sync_error.clone(),
    }
}

pub fn format_observation_lines(observations: &[Observation]) -> Vec<String> {
    observations
        .iter()
        .map(|observation| {
            let status = if observation.synced { "synced" } else { "queued" };
            format!(
                "{}  {:<26} by {:<14} ({:.5}, {:.5})  {}  [{}]",
                observation.id,
                observation.species,
                observation.enumerator,
                observation.location.latitude,
                observation.location.longitude,
                observation.timestamp.format("%Y-%m-%d %H:%M UTC"),
                status
            )
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct OutboxListItem {
    pub observation_id: String,
    pub species: Option<String>,
    pub created_at: String,
    pub retry_count: u32,
    pub last_error: Option<String>,
}

/// Join outbox entries with their records so the view can show the species
/// and last failure next to the retry count.
pub fn outbox_to_list_items(items: &[OutboxItem], records: &[Observation]) -> Vec<OutboxListItem> {
    items
        .iter()
        .map(|item| {
            let record = records
                .iter()
                .find(|record| record.id == item.observation_id);
            OutboxListItem {
                observation_id: item.observation_id.as_str(),
                species: record.map(|record| record.species.clone()),
                created_at: item.created_at.to_rfc3339(),
                retry_count: item.retry_count,
                last_error: record.and_then(|record| record.sync_error.clone()),
            }
        })
        .collect()
}

pub fn format_outbox_lines(items: &[OutboxListItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            let species = item.species.as_deref().unwrap_or("<missing record>");
            let mut line = format!(
                "{}  {:<26} queued {}  retries={}",
                item.observation_id, species, item.created_at, item.retry_count
            );
            if let Some(error) = &item.last_error {
                line.push_str(&format!("  last-error: {error}"));
            }
            line
        })
        .collect()
}
