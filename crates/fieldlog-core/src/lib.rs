//! fieldlog-core - Core library for Fieldlog
//!
//! This crate contains the shared models, local JSON stores, and the
//! offline outbox / sync subsystem used by the Fieldlog interfaces.

pub mod error;
pub mod models;
pub mod net;
pub mod remote;
pub mod services;
pub mod store;
pub mod sync;
pub mod util;

pub use error::{Error, Result};
pub use models::{GeoPoint, Observation, ObservationId, OutboxItem, UserSettings};
pub use sync::SyncReport;
