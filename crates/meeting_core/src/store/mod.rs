//! In-memory meeting stores.
//!
//! # Responsibility
//! - Define the CRUD contract shared by single-owner and shared stores.
//! - Define store-level faults and configuration.
//!
//! # Invariants
//! - "Not found" is a normal outcome: `None` for reads, `false` for
//!   update/delete. It is never reported through `StoreError`.
//! - `StoreError` is reserved for faults the caller cannot recover from.

use crate::model::meeting::{Meeting, MeetingCreate, MeetingId, MeetingPatch};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod id_generator;
pub mod meeting_store;
pub mod shared;

pub use id_generator::{IdGenerationError, IdGenerator, OsRngIdGenerator};
pub use meeting_store::MeetingStore;
pub use shared::SharedMeetingStore;

const DEFAULT_MAX_ID_ATTEMPTS: u32 = 8;

pub type StoreResult<T> = Result<T, StoreError>;

/// Unrecoverable store faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The identifier source could not produce a value.
    IdGeneration(IdGenerationError),
    /// Every draw collided with a live id; the generator is broken.
    IdCollision { attempts: u32, last_id: MeetingId },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdGeneration(err) => write!(f, "{err}"),
            Self::IdCollision { attempts, last_id } => write!(
                f,
                "identifier generator returned live ids {attempts} times in a row (last: {last_id})"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IdGeneration(err) => Some(err),
            Self::IdCollision { .. } => None,
        }
    }
}

impl From<IdGenerationError> for StoreError {
    fn from(value: IdGenerationError) -> Self {
        Self::IdGeneration(value)
    }
}

/// Tunables for a store instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Upper bound on id draws per `create` before reporting a collision
    /// fault. Values below 1 are treated as 1.
    pub max_id_attempts: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_id_attempts: DEFAULT_MAX_ID_ATTEMPTS,
        }
    }
}

impl StoreConfig {
    pub(crate) fn effective_id_attempts(&self) -> u32 {
        self.max_id_attempts.max(1)
    }
}

/// CRUD contract over a keyed meeting collection.
pub trait MeetingRepository {
    /// Assigns a fresh id to `payload`, stores it and returns the full record.
    fn create(&mut self, payload: MeetingCreate) -> StoreResult<Meeting>;
    /// Returns a copy of the record at `id`, or `None` when absent.
    fn get(&self, id: &str) -> Option<Meeting>;
    /// Returns a snapshot of every record in creation order.
    fn get_all(&self) -> Vec<Meeting>;
    /// Applies `patch` to the record at `id`. Returns `false` when absent.
    fn update(&mut self, id: &str, patch: &MeetingPatch) -> bool;
    /// Removes the record at `id`. Returns `false` when absent.
    fn delete(&mut self, id: &str) -> bool;
}
