use crate::errors::{AppError, AppResult};
use crate::store::{ReadOutcome, RecordStore, read, write};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Single-record onboarding sections, one per `onboarding.*` key.
pub struct ProfileRepo<'a> {
    store: &'a mut dyn RecordStore,
}

impl<'a> ProfileRepo<'a> {
    pub fn new(store: &'a mut dyn RecordStore) -> Self {
        Self { store }
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match read::<T>(&*self.store, key)? {
            ReadOutcome::Found(v) => Ok(Some(v)),
            ReadOutcome::Missing => Ok(None),
            ReadOutcome::Corrupt(reason) => Err(AppError::CorruptRecord {
                key: key.to_string(),
                reason,
            }),
        }
    }

    pub fn save<T: Serialize>(&mut self, key: &str, section: &T) -> AppResult<()> {
        write(self.store, key, section)
    }
}
