//! Wildlife observation model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::location::GeoPoint;

/// A unique identifier for an observation, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObservationId(Uuid);

impl ObservationId {
    /// Create a new unique observation ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for ObservationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ObservationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A single field observation.
///
/// Field names serialize in camelCase so the remote JSON objects keep the
/// original payload shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Unique identifier, generated client-side at creation
    pub id: ObservationId,
    /// Observed species
    pub species: String,
    /// Additional free-text items noted alongside the sighting
    pub items: Vec<String>,
    /// Person collecting the data
    pub enumerator: String,
    /// Where the observation was made
    pub location: GeoPoint,
    /// Creation instant, immutable
    pub timestamp: DateTime<Utc>,
    /// Whether this record has been confirmed by the remote store
    pub synced: bool,
    /// Last failed sync attempt, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_attempted: Option<DateTime<Utc>>,
    /// Last sync failure message; overwritten on each failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_error: Option<String>,
}

impl Observation {
    /// Create a new unsynced observation.
    ///
    /// `species` and `enumerator` must be non-empty after trimming. Items
    /// are trimmed and empties are dropped; the remaining order is kept.
    pub fn new(
        species: impl Into<String>,
        items: Vec<String>,
        enumerator: impl Into<String>,
        location: GeoPoint,
    ) -> Result<Self> {
        let species = species.into().trim().to_string();
        if species.is_empty() {
            return Err(Error::InvalidInput("species must not be empty".to_string()));
        }
        let enumerator = enumerator.into().trim().to_string();
        if enumerator.is_empty() {
            return Err(Error::InvalidInput(
                "enumerator must not be empty".to_string(),
            ));
        }

        let items = items
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect();

        Ok(Self {
            id: ObservationId::new(),
            species,
            items,
            enumerator,
            location,
            timestamp: Utc::now(),
            synced: false,
            sync_attempted: None,
            sync_error: None,
        })
    }

    /// Deterministic remote object path for this observation.
    #[must_use]
    pub fn remote_path(&self, base_path: &str) -> String {
        format!("{}/{}.json", base_path.trim_matches('/'), self.id)
    }
}
