//! Thread-safe handle over one meeting store.
//!
//! # Responsibility
//! - Serialize every operation on a shared `MeetingStore` behind one mutex.
//!
//! # Invariants
//! - Each public call holds the lock for its whole duration, so readers never
//!   observe a half-applied mutation.
//! - Clones share the same underlying store.

use crate::model::meeting::{Meeting, MeetingCreate, MeetingPatch};
use crate::store::id_generator::{IdGenerator, OsRngIdGenerator};
use crate::store::meeting_store::MeetingStore;
use crate::store::{MeetingRepository, StoreResult};
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, lock-guarded meeting store handle.
pub struct SharedMeetingStore<G: IdGenerator = OsRngIdGenerator> {
    inner: Arc<Mutex<MeetingStore<G>>>,
}

impl SharedMeetingStore<OsRngIdGenerator> {
    pub fn new() -> Self {
        Self::from_store(MeetingStore::new())
    }
}

impl Default for SharedMeetingStore<OsRngIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> Clone for SharedMeetingStore<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G: IdGenerator> From<MeetingStore<G>> for SharedMeetingStore<G> {
    fn from(value: MeetingStore<G>) -> Self {
        Self::from_store(value)
    }
}

impl<G: IdGenerator> SharedMeetingStore<G> {
    /// Wraps an existing store, taking ownership of it.
    pub fn from_store(store: MeetingStore<G>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn create(&self, payload: MeetingCreate) -> StoreResult<Meeting> {
        self.inner.lock().create(payload)
    }

    pub fn get(&self, id: &str) -> Option<Meeting> {
        self.inner.lock().get(id)
    }

    pub fn get_all(&self) -> Vec<Meeting> {
        self.inner.lock().get_all()
    }

    pub fn update(&self, id: &str, patch: &MeetingPatch) -> bool {
        self.inner.lock().update(id, patch)
    }

    pub fn delete(&self, id: &str) -> bool {
        self.inner.lock().delete(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.lock().contains(id)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Runs `f` with exclusive access, making a compound operation indivisible.
    pub fn with_store<R>(&self, f: impl FnOnce(&mut MeetingStore<G>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }
}

impl<G: IdGenerator> MeetingRepository for SharedMeetingStore<G> {
    fn create(&mut self, payload: MeetingCreate) -> StoreResult<Meeting> {
        SharedMeetingStore::create(self, payload)
    }

    fn get(&self, id: &str) -> Option<Meeting> {
        SharedMeetingStore::get(self, id)
    }

    fn get_all(&self) -> Vec<Meeting> {
        SharedMeetingStore::get_all(self)
    }

    fn update(&mut self, id: &str, patch: &MeetingPatch) -> bool {
        SharedMeetingStore::update(self, id, patch)
    }

    fn delete(&mut self, id: &str) -> bool {
        SharedMeetingStore::delete(self, id)
    }
}
