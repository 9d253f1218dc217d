//! Club events with an explicit lifecycle status.

use crate::model::identity::IdentityId;
use crate::model::{Entity, EntityId, EntityKind};
use crate::store::SLOT_EVENTS;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Event lifecycle state, maintained by hand rather than derived from
/// dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Planning,
    Ongoing,
    Completed,
}

/// A club event spanning one or more days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub status: EventStatus,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub created_by: IdentityId,
}

/// Mutable fields of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub status: EventStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl Entity for Event {
    type Draft = EventDraft;

    const KIND: EntityKind = EntityKind::Event;
    const SLOT: &'static str = SLOT_EVENTS;

    fn id(&self) -> EntityId {
        self.id
    }

    fn create(id: EntityId, draft: EventDraft, actor: IdentityId, _now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            start_date: draft.start_date,
            end_date: draft.end_date,
            created_by: actor,
        }
    }

    fn apply(&mut self, draft: EventDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.status = draft.status;
        self.start_date = draft.start_date;
        self.end_date = draft.end_date;
    }
}
