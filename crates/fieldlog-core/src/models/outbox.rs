//! Outbox queue item model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::observation::ObservationId;

/// A pending-sync entry referencing an observation by id.
///
/// Exists from the moment an observation is saved until its remote upsert
/// is confirmed (or the user unqueues it). Removal never deletes the
/// underlying observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboxItem {
    /// The observation this entry queues
    pub observation_id: ObservationId,
    /// When the entry was enqueued
    pub created_at: DateTime<Utc>,
    /// Failed sync attempts so far; never decremented
    pub retry_count: u32,
}

impl OutboxItem {
    #[must_use]
    pub fn new(observation_id: ObservationId) -> Self {
        Self {
            observation_id,
            created_at: Utc::now(),
            retry_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_starts_with_zero_retries() {
        let item = OutboxItem::new(ObservationId::new());
        assert_eq!(item.retry_count, 0);
    }
}
