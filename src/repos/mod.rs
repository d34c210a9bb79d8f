//! Typed repositories over the record store. Uniqueness rules
//! (one check-in per calendar day, one insight per ISO week) live here
//! as explicit upsert operations, not in calling code.

pub mod cardio;
pub mod checkins;
pub mod insights;
pub mod meals;
pub mod profile;
pub mod workouts;

pub use cardio::CardioRepo;
pub use checkins::CheckinRepo;
pub use insights::InsightRepo;
pub use meals::MealRepo;
pub use profile::ProfileRepo;
pub use workouts::WorkoutRepo;

use crate::errors::{AppError, AppResult};
use crate::store::{ReadOutcome, RecordStore, read};
use serde::de::DeserializeOwned;

/// Result of an upsert against a natural key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced,
}

/// Load the record list under `key`. A missing key is an empty list;
/// a corrupt value is an error the caller must see.
pub(crate) fn load_list<T: DeserializeOwned>(
    store: &dyn RecordStore,
    key: &str,
) -> AppResult<Vec<T>> {
    match read::<Vec<T>>(store, key)? {
        ReadOutcome::Found(v) => Ok(v),
        ReadOutcome::Missing => Ok(Vec::new()),
        ReadOutcome::Corrupt(reason) => Err(AppError::CorruptRecord {
            key: key.to_string(),
            reason,
        }),
    }
}
