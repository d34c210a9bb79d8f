//! Local record store: JSON-serializable values under namespaced string
//! keys. The trait is injected into the repositories so production code
//! runs on SQLite while tests run in memory.

pub mod keys;
pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Outcome of a typed read. "Never set" and "unparsable" are distinct so
/// the caller decides which ones degrade to a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome<T> {
    Found(T),
    Missing,
    Corrupt(String),
}

impl<T> ReadOutcome<T> {
    /// Collapse to the original fall-back-to-default contract.
    pub fn or_default(self, default: T) -> T {
        match self {
            ReadOutcome::Found(v) => v,
            ReadOutcome::Missing | ReadOutcome::Corrupt(_) => default,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ReadOutcome::Found(_))
    }
}

/// Raw key-value contract implemented by each storage backend.
pub trait RecordStore {
    fn get_raw(&self, key: &str) -> AppResult<Option<String>>;
    fn set_raw(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
    fn keys(&self) -> AppResult<Vec<String>>;
}

/// Typed read: parse the stored JSON value under `key`.
pub fn read<T: DeserializeOwned>(store: &dyn RecordStore, key: &str) -> AppResult<ReadOutcome<T>> {
    match store.get_raw(key)? {
        None => Ok(ReadOutcome::Missing),
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(v) => Ok(ReadOutcome::Found(v)),
            Err(e) => Ok(ReadOutcome::Corrupt(e.to_string())),
        },
    }
}

/// Read with the availability-over-visibility contract: any failure,
/// including a backend error, yields the caller's default.
pub fn read_or_default<T: DeserializeOwned>(store: &dyn RecordStore, key: &str, default: T) -> T {
    match read(store, key) {
        Ok(outcome) => outcome.or_default(default),
        Err(_) => default,
    }
}

/// Serialize `value` and store it under `key`, replacing any previous value.
pub fn write<T: Serialize>(store: &mut dyn RecordStore, key: &str, value: &T) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    store.set_raw(key, &raw)
}
