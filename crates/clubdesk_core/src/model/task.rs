//! Assigned tasks with deadlines.
//!
//! # Invariants
//! - `assigned_to` is a value copy of an identity id, not an ownership
//!   edge; it is never revalidated against the roster.
//! - Overdue detection is calendar-day based, unlike meetings which
//!   compare full timestamps.

use crate::model::identity::{Identity, IdentityId, Role};
use crate::model::{Entity, EntityId, EntityKind, Priority};
use crate::store::SLOT_TASKS;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

/// A task assigned to one identity with a calendar deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub assigned_to: IdentityId,
    pub deadline: NaiveDate,
    pub status: TaskStatus,
    pub priority: Priority,
    pub created_by: IdentityId,
    pub created_at: DateTime<Utc>,
}

/// Mutable fields of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub assigned_to: IdentityId,
    pub deadline: NaiveDate,
    pub status: TaskStatus,
    pub priority: Priority,
}

impl Entity for Task {
    type Draft = TaskDraft;

    const KIND: EntityKind = EntityKind::Task;
    const SLOT: &'static str = SLOT_TASKS;

    fn id(&self) -> EntityId {
        self.id
    }

    fn create(id: EntityId, draft: TaskDraft, actor: IdentityId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            assigned_to: draft.assigned_to,
            deadline: draft.deadline,
            status: draft.status,
            priority: draft.priority,
            created_by: actor,
            created_at: now,
        }
    }

    fn apply(&mut self, draft: TaskDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.assigned_to = draft.assigned_to;
        self.deadline = draft.deadline;
        self.status = draft.status;
        self.priority = draft.priority;
    }

    // Members only see their own assignments; admin and secretary see
    // the full board.
    fn visible_to(&self, actor: &Identity) -> bool {
        actor.role != Role::Member || self.assigned_to == actor.id
    }
}

impl Task {
    /// Whether this task should be highlighted as overdue.
    ///
    /// Day-level comparison: a task due today is not yet overdue, and a
    /// completed task never is.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.deadline < today && self.status != TaskStatus::Completed
    }
}
