//! Meeting domain model.
//!
//! # Responsibility
//! - Define the record, creation payload and patch shapes shared by stores.
//!
//! # Invariants
//! - Every stored meeting is identified by a store-generated `MeetingId`.
//! - Deletion is a hard remove; there are no tombstones.

pub mod meeting;
