//! Core domain logic for the meeting tracker.
//! This crate owns meeting identity and the in-memory record store.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::meeting::{Meeting, MeetingCreate, MeetingId, MeetingPatch};
pub use store::{
    IdGenerationError, IdGenerator, MeetingRepository, MeetingStore, OsRngIdGenerator,
    SharedMeetingStore, StoreConfig, StoreError, StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
