//! Meeting identifier generation.
//!
//! # Responsibility
//! - Produce fresh opaque ids for newly created meetings.
//! - Report an unavailable random source as an error instead of panicking.
//!
//! # Invariants
//! - `OsRngIdGenerator` ids are RFC 4122 version-4 UUIDs in lowercase
//!   hyphenated form, drawn from the operating-system CSPRNG.
//! - Generators never consult the store; uniqueness against live ids is
//!   checked by the store itself.

use crate::model::meeting::MeetingId;
use rand::rngs::OsRng;
use rand::RngCore;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Builder;

/// Failure to draw a new identifier from a generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerationError {
    message: String,
}

impl IdGenerationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for IdGenerationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "identifier source unavailable: {}", self.message)
    }
}

impl Error for IdGenerationError {}

/// Source of fresh meeting identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> Result<MeetingId, IdGenerationError>;
}

/// Default generator backed by the operating-system random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRngIdGenerator;

impl OsRngIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for OsRngIdGenerator {
    fn next_id(&mut self) -> Result<MeetingId, IdGenerationError> {
        let mut bytes = [0u8; 16];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|err| IdGenerationError::new(err.to_string()))?;

        Ok(Builder::from_random_bytes(bytes)
            .into_uuid()
            .hyphenated()
            .to_string())
    }
}

impl<F> IdGenerator for F
where
    F: FnMut() -> Result<MeetingId, IdGenerationError>,
{
    fn next_id(&mut self) -> Result<MeetingId, IdGenerationError> {
        self()
    }
}
