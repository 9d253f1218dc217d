//! Scheduled meetings.
//!
//! # Invariants
//! - The persisted collection stays ordered by `(date, time)` ascending;
//!   `insert` places new records in position and `order` restores the
//!   invariant after in-place edits.
//! - Past detection compares the full date+time against now, unlike
//!   tasks which compare calendar days.

use crate::model::identity::IdentityId;
use crate::model::{Entity, EntityId, EntityKind};
use crate::store::SLOT_MEETINGS;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled meeting with agenda and optional call link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: EntityId,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub agenda: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    pub created_by: IdentityId,
}

/// Mutable fields of a meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingDraft {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub agenda: String,
    pub meeting_link: Option<String>,
}

impl Entity for Meeting {
    type Draft = MeetingDraft;

    const KIND: EntityKind = EntityKind::Meeting;
    const SLOT: &'static str = SLOT_MEETINGS;

    fn id(&self) -> EntityId {
        self.id
    }

    fn create(id: EntityId, draft: MeetingDraft, actor: IdentityId, _now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            date: draft.date,
            time: draft.time,
            agenda: draft.agenda,
            meeting_link: draft.meeting_link,
            created_by: actor,
        }
    }

    fn apply(&mut self, draft: MeetingDraft) {
        self.title = draft.title;
        self.date = draft.date;
        self.time = draft.time;
        self.agenda = draft.agenda;
        self.meeting_link = draft.meeting_link;
    }

    fn insert(collection: &mut Vec<Self>, record: Self) {
        let position = collection
            .iter()
            .position(|existing| existing.starts_at() > record.starts_at())
            .unwrap_or(collection.len());
        collection.insert(position, record);
    }

    fn order(collection: &mut [Self]) {
        collection.sort_by_key(Meeting::starts_at);
    }
}

impl Meeting {
    /// Combined scheduling instant used for ordering and past detection.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Whether the meeting has already started, at datetime precision.
    pub fn is_past(&self, now: NaiveDateTime) -> bool {
        self.starts_at() < now
    }
}
