//! Generic entity CRUD controller.
//!
//! # Responsibility
//! - Provide create/update/delete/list over one collection slot,
//!   parametrized by entity kind instead of duplicated per kind.
//! - Gate every mutation on the access policy, evaluated per call.
//! - Stamp creator attribution and creation time on create.
//!
//! # Invariants
//! - Mutations always read the whole collection, modify it in memory
//!   and write the whole collection back.
//! - `update`/`delete` on a missing id is a silent no-op.
//! - `delete` never touches the collection before the prompt confirms.

use crate::model::identity::{Identity, Role};
use crate::model::{Entity, EntityId, EntityKind};
use crate::policy::can_mutate;
use crate::store::{SlotStore, StoreError};
use chrono::Utc;
use log::{debug, info};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;
use uuid::Uuid;

pub type ControllerResult<T> = Result<T, ControllerError>;

/// Controller-level error for gated CRUD operations.
#[derive(Debug)]
pub enum ControllerError {
    /// The actor's role may not mutate this entity kind.
    Forbidden { role: Role, kind: EntityKind },
    Store(StoreError),
}

impl Display for ControllerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forbidden { role, kind } => {
                write!(f, "role {role:?} may not modify {} records", kind.as_str())
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Forbidden { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ControllerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Interactive confirmation seam guarding deletes.
///
/// The presentation layer supplies the implementation (a modal, a
/// terminal prompt); tests substitute accept/decline stubs. The
/// controller proceeds only on `true`.
pub trait DeletePrompt {
    fn confirm(&self, kind: EntityKind, id: EntityId) -> bool;
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Record removed and collection persisted.
    Deleted,
    /// Actor declined the confirmation prompt; nothing changed.
    Declined,
    /// Id absent from the collection; nothing changed.
    NotFound,
}

/// Generic CRUD controller over one collection slot.
pub struct EntityController<'conn, T: Entity> {
    store: SlotStore<'conn>,
    _kind: PhantomData<T>,
}

impl<'conn, T: Entity> EntityController<'conn, T> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            store: SlotStore::new(conn),
            _kind: PhantomData,
        }
    }

    /// Lists the collection as visible to `actor`, in presentation
    /// order.
    pub fn list(&self, actor: &Identity) -> ControllerResult<Vec<T>> {
        let mut collection: Vec<T> = self.store.load(T::SLOT)?;
        collection.retain(|record| record.visible_to(actor));
        T::order(&mut collection);
        Ok(collection)
    }

    /// Creates a record from `draft`, stamping a fresh id, creator
    /// attribution and creation time, and persists the collection.
    pub fn create(&self, actor: &Identity, draft: T::Draft) -> ControllerResult<T> {
        self.ensure_can_mutate(actor)?;

        let record = T::create(Uuid::new_v4(), draft, actor.id, Utc::now());
        let mut collection: Vec<T> = self.store.load(T::SLOT)?;
        T::insert(&mut collection, record.clone());
        self.store.save(T::SLOT, &collection)?;

        info!(
            "event=entity_create module=service kind={} id={} actor={}",
            T::KIND.as_str(),
            record.id(),
            actor.id
        );
        Ok(record)
    }

    /// Replaces the mutable fields of the record with `id`.
    ///
    /// Returns `Ok(false)` when the id is absent (silent no-op);
    /// identity fields are preserved by `Entity::apply`.
    pub fn update(&self, actor: &Identity, id: EntityId, draft: T::Draft) -> ControllerResult<bool> {
        self.ensure_can_mutate(actor)?;

        let mut collection: Vec<T> = self.store.load(T::SLOT)?;
        let Some(record) = collection.iter_mut().find(|record| record.id() == id) else {
            debug!(
                "event=entity_update module=service kind={} id={id} status=not_found",
                T::KIND.as_str()
            );
            return Ok(false);
        };

        record.apply(draft);
        self.store.save(T::SLOT, &collection)?;

        info!(
            "event=entity_update module=service kind={} id={id} actor={}",
            T::KIND.as_str(),
            actor.id
        );
        Ok(true)
    }

    /// Removes the record with `id` after interactive confirmation.
    ///
    /// Declining the prompt leaves all state unchanged; a missing id is
    /// a silent no-op.
    pub fn delete(
        &self,
        actor: &Identity,
        id: EntityId,
        prompt: &dyn DeletePrompt,
    ) -> ControllerResult<DeleteOutcome> {
        self.ensure_can_mutate(actor)?;

        if !prompt.confirm(T::KIND, id) {
            debug!(
                "event=entity_delete module=service kind={} id={id} status=declined",
                T::KIND.as_str()
            );
            return Ok(DeleteOutcome::Declined);
        }

        let mut collection: Vec<T> = self.store.load(T::SLOT)?;
        let before = collection.len();
        collection.retain(|record| record.id() != id);
        if collection.len() == before {
            debug!(
                "event=entity_delete module=service kind={} id={id} status=not_found",
                T::KIND.as_str()
            );
            return Ok(DeleteOutcome::NotFound);
        }

        self.store.save(T::SLOT, &collection)?;
        info!(
            "event=entity_delete module=service kind={} id={id} actor={}",
            T::KIND.as_str(),
            actor.id
        );
        Ok(DeleteOutcome::Deleted)
    }

    fn ensure_can_mutate(&self, actor: &Identity) -> ControllerResult<()> {
        if can_mutate(actor.role, T::KIND) {
            Ok(())
        } else {
            Err(ControllerError::Forbidden {
                role: actor.role,
                kind: T::KIND,
            })
        }
    }
}
