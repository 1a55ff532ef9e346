//! Meeting domain model.
//!
//! # Responsibility
//! - Define the canonical meeting record and its creation payload.
//! - Define the field-slot patch used for partial updates.
//!
//! # Invariants
//! - `id` is assigned by the store and never changed by a patch.
//! - Patch fields replace stored values wholesale; sequences are not merged.
//! - No field content is validated here; callers own input validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque identifier assigned to every stored meeting.
///
/// Kept as a type alias so lookups accept any caller string, while signatures
/// still state which strings are meant as meeting ids.
pub type MeetingId = String;

/// Canonical meeting record owned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    /// Store-generated identifier. Immutable after creation.
    pub id: MeetingId,
    pub title: String,
    /// Calendar date, no timezone attached.
    pub date: NaiveDate,
    /// Free-text time of day, e.g. `09:00`. Not parsed.
    pub start_time: String,
    /// Free-text time of day. Not checked against `start_time`.
    pub end_time: String,
    pub attendees: Vec<String>,
    pub notes: String,
    pub tags: Vec<String>,
}

/// Caller payload for creating a meeting. Same shape as [`Meeting`] minus `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingCreate {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub attendees: Vec<String>,
    pub notes: String,
    pub tags: Vec<String>,
}

/// Partial update applied over an existing meeting.
///
/// Every `Some` slot replaces the stored field as a whole. A supplied
/// `attendees` or `tags` vector becomes the new sequence; nothing is appended.
///
/// The `id` slot exists so wire payloads carrying an `id` key still decode,
/// but it is always ignored when the patch is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeetingPatch {
    /// Ignored on apply. See [`MeetingPatch::apply_to`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<MeetingId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Meeting {
    /// Builds a full record by attaching a store-generated id to a payload.
    pub fn from_create(id: MeetingId, payload: MeetingCreate) -> Self {
        let MeetingCreate {
            title,
            date,
            start_time,
            end_time,
            attendees,
            notes,
            tags,
        } = payload;

        Self {
            id,
            title,
            date,
            start_time,
            end_time,
            attendees,
            notes,
            tags,
        }
    }

    /// Returns the creation payload this record would be rebuilt from.
    pub fn to_create(&self) -> MeetingCreate {
        MeetingCreate {
            title: self.title.clone(),
            date: self.date,
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            attendees: self.attendees.clone(),
            notes: self.notes.clone(),
            tags: self.tags.clone(),
        }
    }
}

impl MeetingPatch {
    /// Starts an empty patch that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = Some(start_time.into());
        self
    }

    pub fn end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }

    pub fn attendees<I, S>(mut self, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attendees = Some(attendees.into_iter().map(Into::into).collect());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Returns whether no applicable field slot is set.
    ///
    /// The `id` slot does not count, since it is never applied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.date.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.attendees.is_none()
            && self.notes.is_none()
            && self.tags.is_none()
    }

    /// Replaces every supplied field on `meeting`, leaving the rest untouched.
    ///
    /// # Invariants
    /// - `meeting.id` is never written, whatever the `id` slot holds.
    pub fn apply_to(&self, meeting: &mut Meeting) {
        if let Some(title) = &self.title {
            meeting.title = title.clone();
        }
        if let Some(date) = self.date {
            meeting.date = date;
        }
        if let Some(start_time) = &self.start_time {
            meeting.start_time = start_time.clone();
        }
        if let Some(end_time) = &self.end_time {
            meeting.end_time = end_time.clone();
        }
        if let Some(attendees) = &self.attendees {
            meeting.attendees = attendees.clone();
        }
        if let Some(notes) = &self.notes {
            meeting.notes = notes.clone();
        }
        if let Some(tags) = &self.tags {
            meeting.tags = tags.clone();
        }
    }
}
