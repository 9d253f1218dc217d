//! Identity records: actors for access control and directory entries.
//!
//! # Responsibility
//! - Define the identity record shared by the fixed login roster and the
//!   mutable member-directory collection.
//!
//! # Invariants
//! - `role` is immutable per identity: directory entries are always
//!   created as `member` and `apply` never changes the role.
//! - Roster identities and directory entries are separate collections;
//!   the roster is never edited through the directory.

use crate::model::{Entity, EntityId, EntityKind};
use crate::store::SLOT_MEMBERS;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an identity, used by `created_by` and
/// `assigned_to` references.
pub type IdentityId = Uuid;

/// Actor role determining mutation rights per entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Secretary,
    Member,
}

/// Self-reported availability shown in the member directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkStatus {
    Free,
    Busy,
    Rest,
}

/// An actor with a role, plus optional external-profile handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: IdentityId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    pub work_status: WorkStatus,
}

/// Mutable fields of a member-directory entry.
///
/// Role is deliberately absent: directory entries are plain members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDraft {
    pub name: String,
    pub email: String,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub work_status: WorkStatus,
}

impl Entity for Identity {
    type Draft = MemberDraft;

    const KIND: EntityKind = EntityKind::Member;
    const SLOT: &'static str = SLOT_MEMBERS;

    fn id(&self) -> EntityId {
        self.id
    }

    fn create(id: EntityId, draft: MemberDraft, _actor: IdentityId, _now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            role: Role::Member,
            github: draft.github,
            linkedin: draft.linkedin,
            work_status: draft.work_status,
        }
    }

    fn apply(&mut self, draft: MemberDraft) {
        self.name = draft.name;
        self.email = draft.email;
        self.github = draft.github;
        self.linkedin = draft.linkedin;
        self.work_status = draft.work_status;
    }

    // Directory entries append in enrollment order rather than
    // newest-first.
    fn insert(collection: &mut Vec<Self>, record: Self) {
        collection.push(record);
    }
}

impl Identity {
    /// Builds a roster identity with a fixed id.
    pub(crate) fn roster_entry(
        id: u128,
        name: &str,
        email: &str,
        role: Role,
        work_status: WorkStatus,
    ) -> Self {
        Self {
            id: Uuid::from_u128(id),
            name: name.to_string(),
            email: email.to_string(),
            role,
            github: None,
            linkedin: None,
            work_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Identity, MemberDraft, Role, WorkStatus};
    use crate::model::Entity;
    use chrono::Utc;
    use uuid::Uuid;

    fn draft(name: &str) -> MemberDraft {
        MemberDraft {
            name: name.to_string(),
            email: format!("{name}@nstsdc.com"),
            github: None,
            linkedin: None,
            work_status: WorkStatus::Free,
        }
    }

    #[test]
    fn directory_entries_are_created_as_members() {
        let entry = Identity::create(Uuid::new_v4(), draft("dana"), Uuid::new_v4(), Utc::now());
        assert_eq!(entry.role, Role::Member);
    }

    #[test]
    fn apply_preserves_role() {
        let mut entry =
            Identity::create(Uuid::new_v4(), draft("dana"), Uuid::new_v4(), Utc::now());
        entry.apply(MemberDraft {
            work_status: WorkStatus::Busy,
            ..draft("dana renamed")
        });
        assert_eq!(entry.role, Role::Member);
        assert_eq!(entry.name, "dana renamed");
        assert_eq!(entry.work_status, WorkStatus::Busy);
    }

    #[test]
    fn directory_insert_appends() {
        let mut collection = Vec::new();
        let first = Identity::create(Uuid::new_v4(), draft("a"), Uuid::new_v4(), Utc::now());
        let second = Identity::create(Uuid::new_v4(), draft("b"), Uuid::new_v4(), Utc::now());
        Identity::insert(&mut collection, first.clone());
        Identity::insert(&mut collection, second.clone());
        assert_eq!(collection[0].id, first.id);
        assert_eq!(collection[1].id, second.id);
    }
}
