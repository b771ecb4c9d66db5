//! Local persistence adapter for tool state.
//!
//! # Responsibility
//! - Model browser-style key-value storage behind one trait.
//! - Provide one generic, typed `load`/`save` pair shared by every tool.
//! - Keep parsing failures from ever reaching the caller.
//!
//! # Invariants
//! - `load` never fails: absent, unreadable or unparsable values yield the
//!   supplied default.
//! - Values are written as a versioned JSON envelope.
//! - One key holds one tool's whole state; last writer wins.

use crate::db::DbError;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod envelope;
mod memory;
mod persisted;
mod sqlite;

pub use envelope::{decode_payload, encode_payload, PayloadError, PAYLOAD_VERSION};
pub use memory::MemoryStore;
pub use persisted::PersistedState;
pub use sqlite::SqliteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for writes and raw reads.
#[derive(Debug)]
pub enum StoreError {
    /// Key is blank.
    InvalidKey,
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey => write!(f, "storage key cannot be empty"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize stored value: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidKey => None,
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

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// String key-value storage with local-storage semantics.
pub trait KeyValueStore {
    /// Returns the raw stored string for `key`, if any.
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()>;
    /// Removes `key`; removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove_item(key)
    }
}

/// Loads the value stored under `key`, or `default` when it cannot be used.
///
/// Failures are logged at `warn` with the key and failure kind only.
pub fn load<T, S>(store: &S, key: &str, default: T) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("event=storage_load module=storage status=default reason=absent key={key}");
            return default;
        }
        Err(err) => {
            warn!(
                "event=storage_load module=storage status=default reason=read_failed key={key} error={err}"
            );
            return default;
        }
    };

    match decode_payload(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(
                "event=storage_load module=storage status=default reason={} key={key}",
                err.reason_code()
            );
            default
        }
    }
}

/// Serializes `value` and writes it under `key`.
pub fn save<T, S>(store: &mut S, key: &str, value: &T) -> StoreResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let payload = encode_payload(value)?;
    store.set_item(key, &payload)
}

/// Removes the value stored under `key`.
pub fn clear<S: KeyValueStore + ?Sized>(store: &mut S, key: &str) -> StoreResult<()> {
    store.remove_item(key)
}

pub(crate) fn check_key(key: &str) -> StoreResult<()> {
    if key.trim().is_empty() {
        return Err(StoreError::InvalidKey);
    }
    Ok(())
}
