//! Session and identity provider.
//!
//! # Responsibility
//! - Hold the current actor identity (Anonymous or Authenticated).
//! - Expose login/logout transitions and the fixed login roster.
//! - Persist the current identity so a restart restores the session.
//!
//! # Invariants
//! - Login succeeds only for a roster email plus the shared demo secret.
//! - Credential failure is a single generic error; unknown email and
//!   wrong password are indistinguishable to the caller.
//! - Restore never re-validates credentials; an undecodable session
//!   payload reads as Anonymous.
//!
//! The shared-secret check is a demonstration stand-in for a real
//! credential protocol and must not be treated as security.

use crate::model::identity::{Identity, IdentityId, Role, WorkStatus};
use crate::store::{SlotStore, StoreError, SLOT_SESSION};
use log::info;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

// Demo stand-in for a credential check; every roster account shares it.
const SHARED_DEMO_SECRET: &str = "password123";

static ROSTER: Lazy<Vec<Identity>> = Lazy::new(|| {
    vec![
        Identity::roster_entry(
            1,
            "Admin User",
            "admin@nstsdc.com",
            Role::Admin,
            WorkStatus::Busy,
        ),
        Identity::roster_entry(
            2,
            "Secretary User",
            "secretary@nstsdc.com",
            Role::Secretary,
            WorkStatus::Free,
        ),
        Identity::roster_entry(
            3,
            "Member User",
            "member@nstsdc.com",
            Role::Member,
            WorkStatus::Free,
        ),
    ]
});

/// Fixed read-only roster of known login identities.
pub fn roster() -> &'static [Identity] {
    &ROSTER
}

/// Resolves a roster identity by id, for display names and assignment
/// pickers.
pub fn find_identity(id: IdentityId) -> Option<&'static Identity> {
    ROSTER.iter().find(|identity| identity.id == id)
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Session-layer error.
#[derive(Debug)]
pub enum AuthError {
    /// Unknown email or wrong secret; deliberately undifferentiated.
    InvalidCredentials,
    Store(StoreError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "invalid credentials"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidCredentials => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Two-state session provider: Anonymous or Authenticated.
pub struct Session<'conn> {
    store: SlotStore<'conn>,
    current: Option<Identity>,
}

impl<'conn> Session<'conn> {
    /// Restores session state from the durable session slot.
    ///
    /// A previously persisted identity becomes current without any
    /// credential re-validation; absence or an undecodable payload
    /// starts Anonymous.
    pub fn restore(conn: &'conn Connection) -> Result<Self, StoreError> {
        let store = SlotStore::new(conn);
        let current = store.load_record::<Identity>(SLOT_SESSION)?;
        if let Some(identity) = &current {
            info!(
                "event=session_restore module=session status=ok identity={} role={:?}",
                identity.id, identity.role
            );
        }
        Ok(Self { store, current })
    }

    /// Current identity, if authenticated.
    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    /// Attempts the Anonymous -> Authenticated transition.
    ///
    /// On success the matched roster identity is persisted to the
    /// session slot and becomes current.
    pub fn login(&mut self, email: &str, password: &str) -> AuthResult<&Identity> {
        let matched = ROSTER
            .iter()
            .find(|identity| identity.email == email)
            .filter(|_| password == SHARED_DEMO_SECRET)
            .ok_or(AuthError::InvalidCredentials)?;

        self.store.save_record(SLOT_SESSION, matched)?;
        info!(
            "event=session_login module=session status=ok identity={} role={:?}",
            matched.id, matched.role
        );
        self.current = Some(matched.clone());
        Ok(matched)
    }

    /// Authenticated -> Anonymous transition; clears the session slot.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        if let Some(identity) = self.current.take() {
            info!(
                "event=session_logout module=session status=ok identity={}",
                identity.id
            );
        }
        self.store.clear(SLOT_SESSION)
    }
}

#[cfg(test)]
mod tests {
    use super::{find_identity, roster};
    use crate::model::identity::Role;

    #[test]
    fn roster_has_one_identity_per_role() {
        let roles: Vec<Role> = roster().iter().map(|identity| identity.role).collect();
        assert!(roles.contains(&Role::Admin));
        assert!(roles.contains(&Role::Secretary));
        assert!(roles.contains(&Role::Member));
        assert_eq!(roles.len(), 3);
    }

    #[test]
    fn find_identity_resolves_roster_ids() {
        let admin = roster()
            .iter()
            .find(|identity| identity.role == Role::Admin)
            .unwrap();
        assert_eq!(find_identity(admin.id).unwrap().name, admin.name);
    }
}
