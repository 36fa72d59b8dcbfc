//! Data models

pub mod location;
pub mod observation;
pub mod outbox;
pub mod settings;
pub mod species;

pub use location::GeoPoint;
pub use observation::{Observation, ObservationId};
pub use outbox::OutboxItem;
pub use settings::UserSettings;
pub use species::COMMON_SPECIES;
