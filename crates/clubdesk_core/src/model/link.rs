//! External form/resource links.

use crate::model::identity::IdentityId;
use crate::model::{Entity, EntityId, EntityKind};
use crate::store::SLOT_LINKS;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Grouping bucket for shared links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkCategory {
    Registration,
    Feedback,
    Github,
    Other,
}

/// A shared external link with a category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: LinkCategory,
    pub created_by: IdentityId,
}

/// Mutable fields of a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDraft {
    pub title: String,
    pub description: String,
    pub url: String,
    pub category: LinkCategory,
}

impl Entity for Link {
    type Draft = LinkDraft;

    const KIND: EntityKind = EntityKind::Link;
    const SLOT: &'static str = SLOT_LINKS;

    fn id(&self) -> EntityId {
        self.id
    }

    fn create(id: EntityId, draft: LinkDraft, actor: IdentityId, _now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            url: draft.url,
            category: draft.category,
            created_by: actor,
        }
    }

    fn apply(&mut self, draft: LinkDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.url = draft.url;
        self.category = draft.category;
    }
}
