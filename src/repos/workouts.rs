use crate::errors::{AppError, AppResult};
use crate::models::workout::{WorkoutLog, WorkoutSession};
use crate::repos::load_list;
use crate::store::{ReadOutcome, RecordStore, keys, read, write};

pub struct WorkoutRepo<'a> {
    store: &'a mut dyn RecordStore,
}

impl<'a> WorkoutRepo<'a> {
    pub fn new(store: &'a mut dyn RecordStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> AppResult<Vec<WorkoutLog>> {
        load_list(&*self.store, keys::WORKOUT_LOGS)
    }

    /// Append-only: completed sessions are never rewritten.
    pub fn append(&mut self, log: WorkoutLog) -> AppResult<()> {
        let mut logs = self.list()?;
        logs.push(log);
        write(self.store, keys::WORKOUT_LOGS, &logs)
    }

    pub fn session(&self, workout_id: &str) -> AppResult<Option<WorkoutSession>> {
        let key = keys::workout_session(workout_id);
        match read::<WorkoutSession>(&*self.store, &key)? {
            ReadOutcome::Found(s) => Ok(Some(s)),
            ReadOutcome::Missing => Ok(None),
            ReadOutcome::Corrupt(reason) => Err(AppError::CorruptRecord { key, reason }),
        }
    }

    pub fn save_session(&mut self, session: &WorkoutSession) -> AppResult<()> {
        let key = keys::workout_session(&session.workout_id);
        write(self.store, &key, session)
    }

    pub fn clear_session(&mut self, workout_id: &str) -> AppResult<()> {
        self.store.remove(&keys::workout_session(workout_id))
    }

    /// Workout ids with an in-progress session.
    pub fn open_sessions(&self) -> AppResult<Vec<String>> {
        let ids = self
            .store
            .keys()?
            .iter()
            .filter_map(|k| keys::session_workout_id(k).map(str::to_string))
            .collect();
        Ok(ids)
    }
}
