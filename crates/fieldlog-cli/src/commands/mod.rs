pub mod add;
pub mod common;
pub mod config;
pub mod list;
pub mod outbox;
pub mod species;
pub mod sync;
