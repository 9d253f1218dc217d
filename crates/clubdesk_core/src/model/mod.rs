//! Domain model for the seven club collections.
//!
//! # Responsibility
//! - Define the entity records persisted per collection slot.
//! - Define the [`Entity`] contract that lets one generic controller
//!   serve every entity kind.
//!
//! # Invariants
//! - Every record is identified by a stable [`EntityId`] generated at
//!   creation and never changed.
//! - `apply` never touches `id`, `created_by` or `created_at`.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod event;
pub mod identity;
pub mod link;
pub mod meeting;
pub mod minutes;
pub mod notice;
pub mod task;

use crate::model::identity::{Identity, IdentityId};

/// Stable identifier for every persisted record.
pub type EntityId = Uuid;

/// Collection kinds subject to access-policy decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Notice,
    Minutes,
    Task,
    Meeting,
    Link,
    Event,
    Member,
}

impl EntityKind {
    /// Stable string id used in logging events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Notice => "notice",
            Self::Minutes => "minutes",
            Self::Task => "task",
            Self::Meeting => "meeting",
            Self::Link => "link",
            Self::Event => "event",
            Self::Member => "member",
        }
    }
}

/// Urgency level shared by notices and tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Contract binding one entity kind to the generic CRUD controller.
///
/// `Draft` carries the mutable (form-editable) fields. `create` and
/// `apply` are the only construction/mutation paths, so identity-field
/// preservation is enforced here rather than in the controller.
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Form input: all mutable fields of the record.
    type Draft;

    /// Kind used for access-policy decisions and logging.
    const KIND: EntityKind;
    /// Durable slot holding this collection.
    const SLOT: &'static str;

    fn id(&self) -> EntityId;

    /// Builds a new record from a draft, stamping creator attribution
    /// and, where the record carries one, the creation time.
    fn create(id: EntityId, draft: Self::Draft, actor: IdentityId, now: DateTime<Utc>) -> Self;

    /// Replaces all mutable fields from the draft, preserving `id`,
    /// `created_by` and `created_at`.
    fn apply(&mut self, draft: Self::Draft);

    /// Whether the record appears in `actor`'s list view.
    fn visible_to(&self, actor: &Identity) -> bool {
        let _ = actor;
        true
    }

    /// Inserts a freshly created record into the collection.
    ///
    /// Default is prepend (newest first); kinds with positional
    /// semantics override.
    fn insert(collection: &mut Vec<Self>, record: Self) {
        collection.insert(0, record);
    }

    /// Presentation ordering applied to list views. Default keeps
    /// insertion order.
    fn order(collection: &mut [Self]) {
        let _ = collection;
    }
}

/// Strips blank rows from a dynamically-sized list-of-strings field.
///
/// Rows are trimmed for the emptiness check but stored as entered.
pub(crate) fn strip_blank_rows(rows: Vec<String>) -> Vec<String> {
    rows.into_iter()
        .filter(|row| !row.trim().is_empty())
        .collect()
}
