//! Notice-board records.

use crate::model::identity::IdentityId;
use crate::model::{Entity, EntityId, EntityKind, Priority};
use crate::store::SLOT_NOTICES;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pinned announcement visible to every authenticated role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub created_by: IdentityId,
    pub created_at: DateTime<Utc>,
}

/// Mutable fields of a notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeDraft {
    pub title: String,
    pub content: String,
    pub priority: Priority,
}

impl Entity for Notice {
    type Draft = NoticeDraft;

    const KIND: EntityKind = EntityKind::Notice;
    const SLOT: &'static str = SLOT_NOTICES;

    fn id(&self) -> EntityId {
        self.id
    }

    fn create(id: EntityId, draft: NoticeDraft, actor: IdentityId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            priority: draft.priority,
            created_by: actor,
            created_at: now,
        }
    }

    fn apply(&mut self, draft: NoticeDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.priority = draft.priority;
    }
}
