//! Meeting-minutes records (MOMs).
//!
//! # Invariants
//! - `participants` and `decisions` are ordered row lists; blank rows
//!   are stripped before the record is persisted, on both create and
//!   update.

use crate::model::identity::IdentityId;
use crate::model::{strip_blank_rows, Entity, EntityId, EntityKind};
use crate::store::SLOT_MINUTES;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Minutes of one meeting: participants, summary and decisions taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinutesRecord {
    pub id: EntityId,
    pub title: String,
    pub date: NaiveDate,
    pub participants: Vec<String>,
    pub summary: String,
    pub decisions: Vec<String>,
    pub created_by: IdentityId,
    pub created_at: DateTime<Utc>,
}

/// Mutable fields of a minutes record.
///
/// Row lists arrive as edited in the form, blanks included; they are
/// cleaned on apply/create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinutesDraft {
    pub title: String,
    pub date: NaiveDate,
    pub participants: Vec<String>,
    pub summary: String,
    pub decisions: Vec<String>,
}

impl Entity for MinutesRecord {
    type Draft = MinutesDraft;

    const KIND: EntityKind = EntityKind::Minutes;
    const SLOT: &'static str = SLOT_MINUTES;

    fn id(&self) -> EntityId {
        self.id
    }

    fn create(id: EntityId, draft: MinutesDraft, actor: IdentityId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            date: draft.date,
            participants: strip_blank_rows(draft.participants),
            summary: draft.summary,
            decisions: strip_blank_rows(draft.decisions),
            created_by: actor,
            created_at: now,
        }
    }

    fn apply(&mut self, draft: MinutesDraft) {
        self.title = draft.title;
        self.date = draft.date;
        self.participants = strip_blank_rows(draft.participants);
        self.summary = draft.summary;
        self.decisions = strip_blank_rows(draft.decisions);
    }
}

#[cfg(test)]
mod tests {
    use super::{MinutesDraft, MinutesRecord};
    use crate::model::Entity;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    #[test]
    fn create_strips_blank_rows_from_both_lists() {
        let record = MinutesRecord::create(
            Uuid::new_v4(),
            MinutesDraft {
                title: "weekly".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 5, 5).unwrap(),
                participants: vec!["alice".to_string(), " ".to_string()],
                summary: "notes".to_string(),
                decisions: vec!["".to_string(), "ship it".to_string()],
            },
            Uuid::new_v4(),
            Utc::now(),
        );
        assert_eq!(record.participants, vec!["alice"]);
        assert_eq!(record.decisions, vec!["ship it"]);
    }
}
