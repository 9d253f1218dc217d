//! Durable slot store: one named key-value slot per collection.
//!
//! # Responsibility
//! - Bind in-memory ordered collections to named slots in the `slots`
//!   table, serialized as JSON payloads.
//! - Provide the single-record variant used by the session slot.
//!
//! # Invariants
//! - `save` replaces the whole payload for a slot; there is no partial
//!   or incremental write.
//! - A payload that fails to decode is treated as absent: `load` falls
//!   back to the caller-supplied default and only logs a warning.
//! - SQLite transport errors are never swallowed.

use crate::db::DbError;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Slot holding the persisted current-session identity record.
pub const SLOT_SESSION: &str = "current-session-identity";
/// Slot holding the notice collection.
pub const SLOT_NOTICES: &str = "notices";
/// Slot holding the meeting-minutes collection.
pub const SLOT_MINUTES: &str = "minutes-records";
/// Slot holding the task collection.
pub const SLOT_TASKS: &str = "tasks";
/// Slot holding the meeting collection.
pub const SLOT_MEETINGS: &str = "meetings";
/// Slot holding the external-link collection.
pub const SLOT_LINKS: &str = "links";
/// Slot holding the event collection.
pub const SLOT_EVENTS: &str = "events";
/// Slot holding the member-directory collection.
pub const SLOT_MEMBERS: &str = "member-directory";

pub type StoreResult<T> = Result<T, StoreError>;

/// Slot store error for persistence operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize slot payload: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// SQLite-backed slot store.
///
/// Borrows the connection; one store can serve every collection since
/// slots are addressed by name.
pub struct SlotStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SlotStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Loads the ordered collection stored under `slot`, or an empty
    /// collection when the slot is absent or undecodable.
    pub fn load<T: DeserializeOwned>(&self, slot: &str) -> StoreResult<Vec<T>> {
        self.load_or(slot, Vec::new())
    }

    /// Loads the ordered collection stored under `slot`, or `default`
    /// when the slot is absent or undecodable.
    ///
    /// Decode failure is recovered silently: the corrupt payload is
    /// logged and the default is returned, never an error.
    pub fn load_or<T: DeserializeOwned>(
        &self,
        slot: &str,
        default: Vec<T>,
    ) -> StoreResult<Vec<T>> {
        let Some(payload) = self.read_payload(slot)? else {
            return Ok(default);
        };

        match serde_json::from_str(&payload) {
            Ok(collection) => Ok(collection),
            Err(err) => {
                warn!(
                    "event=slot_decode module=store status=fallback slot={slot} error={err}"
                );
                Ok(default)
            }
        }
    }

    /// Serializes and durably writes the full collection for `slot`,
    /// replacing any prior payload.
    pub fn save<T: Serialize>(&self, slot: &str, collection: &[T]) -> StoreResult<()> {
        let payload = serde_json::to_string(collection).map_err(StoreError::Serialize)?;
        self.write_payload(slot, &payload)
    }

    /// Loads the single record stored under `slot`, if any.
    ///
    /// Same fallback semantics as [`SlotStore::load_or`]: an undecodable
    /// payload reads as absent.
    pub fn load_record<T: DeserializeOwned>(&self, slot: &str) -> StoreResult<Option<T>> {
        let Some(payload) = self.read_payload(slot)? else {
            return Ok(None);
        };

        match serde_json::from_str(&payload) {
            Ok(record) => Ok(Some(record)),
            Err(err) => {
                warn!(
                    "event=slot_decode module=store status=fallback slot={slot} error={err}"
                );
                Ok(None)
            }
        }
    }

    /// Writes a single record under `slot`, replacing any prior payload.
    pub fn save_record<T: Serialize>(&self, slot: &str, record: &T) -> StoreResult<()> {
        let payload = serde_json::to_string(record).map_err(StoreError::Serialize)?;
        self.write_payload(slot, &payload)
    }

    /// Removes the payload stored under `slot`. Absent slots are a no-op.
    pub fn clear(&self, slot: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM slots WHERE slot = ?1;", [slot])?;
        Ok(())
    }

    fn read_payload(&self, slot: &str) -> StoreResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM slots WHERE slot = ?1;",
                [slot],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn write_payload(&self, slot: &str, payload: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO slots (slot, payload, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(slot) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![slot, payload, epoch_ms()],
        )?;
        Ok(())
    }
}

fn epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
