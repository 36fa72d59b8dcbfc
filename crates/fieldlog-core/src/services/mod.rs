//! Service facades shared across clients

mod capture;

pub use capture::{CaptureService, ObservationDraft};
