//! Remote upsert client for the content-addressed observation store.

mod config;
mod github;

use std::future::Future;

use crate::error::Result;
use crate::models::Observation;

pub use config::{RemoteConfig, DEFAULT_BASE_PATH};
pub use github::GitHubContentClient;

/// Conditional create-or-update of one observation against the remote
/// store.
///
/// Implementations must be idempotent from the caller's perspective:
/// repeated upserts of an unchanged observation converge to one remote
/// object, because failed writes do not partially commit.
pub trait RemoteStore {
    fn upsert(&self, observation: &Observation) -> impl Future<Output = Result<()>> + Send;
}
