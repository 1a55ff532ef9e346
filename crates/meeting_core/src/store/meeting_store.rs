//! Single-owner in-memory meeting store.
//!
//! # Responsibility
//! - Own the id -> meeting mapping and its creation order.
//! - Be the only place that assigns ids or structurally mutates records.
//!
//! # Invariants
//! - Every key in `records` appears exactly once in `order`, and vice versa.
//! - Ids are produced by the store's generator, checked against live ids, and
//!   never rewritten afterwards.
//! - Update keeps an entry's position; delete drops it permanently.
//! - Callers only ever receive clones of stored records.

use crate::model::meeting::{Meeting, MeetingCreate, MeetingId, MeetingPatch};
use crate::store::id_generator::{IdGenerator, OsRngIdGenerator};
use crate::store::{MeetingRepository, StoreConfig, StoreError, StoreResult};
use log::{debug, error, warn};
use std::collections::HashMap;

/// In-memory meeting store with insertion-ordered listing.
///
/// Mutating operations take `&mut self`; wrap the store in
/// [`SharedMeetingStore`](crate::store::SharedMeetingStore) to use it from
/// several threads.
#[derive(Debug)]
pub struct MeetingStore<G: IdGenerator = OsRngIdGenerator> {
    records: HashMap<MeetingId, Meeting>,
    order: Vec<MeetingId>,
    id_generator: G,
    config: StoreConfig,
}

impl MeetingStore<OsRngIdGenerator> {
    /// Creates an empty store backed by the operating-system random source.
    pub fn new() -> Self {
        Self::with_generator(OsRngIdGenerator::new())
    }
}

impl Default for MeetingStore<OsRngIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> MeetingStore<G> {
    /// Creates an empty store drawing ids from `id_generator`.
    pub fn with_generator(id_generator: G) -> Self {
        Self::with_config(StoreConfig::default(), id_generator)
    }

    /// Creates an empty store with explicit tunables.
    pub fn with_config(config: StoreConfig, id_generator: G) -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
            id_generator,
            config,
        }
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    /// Stores `payload` under a freshly generated id and returns the record.
    ///
    /// # Errors
    /// - `StoreError::IdGeneration` when the id source is unavailable.
    /// - `StoreError::IdCollision` when every permitted draw hit a live id.
    ///
    /// The store is left unchanged on error.
    pub fn create(&mut self, payload: MeetingCreate) -> StoreResult<Meeting> {
        let id = self.fresh_id()?;
        let meeting = Meeting::from_create(id.clone(), payload);

        self.records.insert(id.clone(), meeting.clone());
        self.order.push(id);

        debug!(
            "event=meeting_create module=store status=ok count={}",
            self.records.len()
        );
        Ok(meeting)
    }

    /// Returns a copy of the meeting at `id`, or `None` when absent.
    pub fn get(&self, id: &str) -> Option<Meeting> {
        self.records.get(id).cloned()
    }

    /// Returns every meeting in creation order as an independent snapshot.
    pub fn get_all(&self) -> Vec<Meeting> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .cloned()
            .collect()
    }

    /// Replaces the fields supplied in `patch` on the meeting at `id`.
    ///
    /// Returns `false` without touching the store when `id` is absent. An `id`
    /// slot inside `patch` is ignored.
    pub fn update(&mut self, id: &str, patch: &MeetingPatch) -> bool {
        let Some(meeting) = self.records.get_mut(id) else {
            debug!("event=meeting_update module=store status=not_found");
            return false;
        };

        if patch.id.as_deref().is_some_and(|patch_id| patch_id != id) {
            warn!("event=meeting_update module=store status=ignored_field field=id");
        }
        patch.apply_to(meeting);

        debug!("event=meeting_update module=store status=ok");
        true
    }

    /// Removes the meeting at `id`. Returns `false` when absent.
    pub fn delete(&mut self, id: &str) -> bool {
        if self.records.remove(id).is_none() {
            debug!("event=meeting_delete module=store status=not_found");
            return false;
        }
        self.order.retain(|entry| entry != id);

        debug!(
            "event=meeting_delete module=store status=ok count={}",
            self.records.len()
        );
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn fresh_id(&mut self) -> StoreResult<MeetingId> {
        let attempts = self.config.effective_id_attempts();
        let mut last_id = MeetingId::new();

        for attempt in 1..=attempts {
            let candidate = self.id_generator.next_id().map_err(|err| {
                error!(
                    "event=meeting_create module=store status=error reason=id_generation"
                );
                StoreError::from(err)
            })?;

            if !self.records.contains_key(&candidate) {
                return Ok(candidate);
            }

            warn!(
                "event=meeting_create module=store status=retry reason=id_collision attempt={attempt}"
            );
            last_id = candidate;
        }

        error!(
            "event=meeting_create module=store status=error reason=id_collision attempts={attempts}"
        );
        Err(StoreError::IdCollision { attempts, last_id })
    }
}

impl<G: IdGenerator> MeetingRepository for MeetingStore<G> {
    fn create(&mut self, payload: MeetingCreate) -> StoreResult<Meeting> {
        MeetingStore::create(self, payload)
    }

    fn get(&self, id: &str) -> Option<Meeting> {
        MeetingStore::get(self, id)
    }

    fn get_all(&self) -> Vec<Meeting> {
        MeetingStore::get_all(self)
    }

    fn update(&mut self, id: &str, patch: &MeetingPatch) -> bool {
        MeetingStore::update(self, id, patch)
    }

    fn delete(&mut self, id: &str) -> bool {
        MeetingStore::delete(self, id)
    }
}
