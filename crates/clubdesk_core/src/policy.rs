//! Role-based access policy.
//!
//! # Responsibility
//! - Map `(role, entity kind)` to allowed mutation rights.
//!
//! # Invariants
//! - Pure and stateless: decisions are computed at every call site and
//!   never cached across identity changes.
//! - Reads are open to every authenticated role; per-record read
//!   filtering (member task visibility) lives on the entity itself.

use crate::model::identity::Role;
use crate::model::EntityKind;

/// Whether `role` may create, edit or delete records of `kind`.
///
/// Minutes are maintained by the secretary (or admin); every other
/// collection is admin-only.
pub fn can_mutate(role: Role, kind: EntityKind) -> bool {
    match kind {
        EntityKind::Minutes => matches!(role, Role::Admin | Role::Secretary),
        EntityKind::Notice
        | EntityKind::Task
        | EntityKind::Meeting
        | EntityKind::Link
        | EntityKind::Event
        | EntityKind::Member => role == Role::Admin,
    }
}
