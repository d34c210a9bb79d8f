//! In-memory record store, used by unit tests.

use crate::errors::AppResult;
use crate::store::RecordStore;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    map: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing serialization. Lets tests plant
    /// corrupt payloads.
    pub fn seed_raw(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_string(), value.to_string());
    }
}

impl RecordStore for MemoryStore {
    fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.map.get(key).cloned())
    }

    fn set_raw(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.map.remove(key);
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.map.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ReadOutcome, read, read_or_default, write};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        label: String,
        count: u32,
        tags: Vec<String>,
    }

    fn sample() -> Sample {
        Sample {
            label: "morning".into(),
            count: 3,
            tags: vec!["a".into(), "b".into()],
        }
    }

    #[test]
    fn round_trip_is_deeply_equal() {
        let mut store = MemoryStore::new();
        write(&mut store, "test.sample", &sample()).unwrap();

        let out: ReadOutcome<Sample> = read(&store, "test.sample").unwrap();
        assert_eq!(out, ReadOutcome::Found(sample()));
    }

    #[test]
    fn missing_key_reads_as_missing_and_default() {
        let store = MemoryStore::new();

        let out: ReadOutcome<Sample> = read(&store, "test.absent").unwrap();
        assert_eq!(out, ReadOutcome::Missing);

        let v = read_or_default(&store, "test.absent", sample());
        assert_eq!(v, sample());
    }

    #[test]
    fn corrupt_value_is_distinguished_from_missing() {
        let mut store = MemoryStore::new();
        store.seed_raw("test.bad", "{not json");

        let out: ReadOutcome<Sample> = read(&store, "test.bad").unwrap();
        assert!(matches!(out, ReadOutcome::Corrupt(_)));

        // The silent-default path still degrades to the default.
        let v = read_or_default(&store, "test.bad", sample());
        assert_eq!(v, sample());
    }

    #[test]
    fn remove_deletes_the_key() {
        let mut store = MemoryStore::new();
        write(&mut store, "test.sample", &sample()).unwrap();
        store.remove("test.sample").unwrap();

        let out: ReadOutcome<Sample> = read(&store, "test.sample").unwrap();
        assert_eq!(out, ReadOutcome::Missing);
        assert!(store.keys().unwrap().is_empty());
    }
}
