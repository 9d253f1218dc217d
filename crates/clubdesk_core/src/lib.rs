//! Core domain logic for the clubdesk dashboard.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod policy;
pub mod service;
pub mod session;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{Event, EventDraft, EventStatus};
pub use model::identity::{Identity, IdentityId, MemberDraft, Role, WorkStatus};
pub use model::link::{Link, LinkCategory, LinkDraft};
pub use model::meeting::{Meeting, MeetingDraft};
pub use model::minutes::{MinutesDraft, MinutesRecord};
pub use model::notice::{Notice, NoticeDraft};
pub use model::task::{Task, TaskDraft, TaskStatus};
pub use model::{Entity, EntityId, EntityKind, Priority};
pub use policy::can_mutate;
pub use service::controller::{
    ControllerError, ControllerResult, DeleteOutcome, DeletePrompt, EntityController,
};
pub use session::{find_identity, roster, AuthError, AuthResult, Session};
pub use store::{SlotStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
