use crate::errors::{AppError, AppResult};
use crate::models::workout::{SetEntry, WorkoutLog, WorkoutSession};
use crate::repos::WorkoutRepo;
use crate::store::RecordStore;
use crate::ui::messages::{info, success};

/// High-level business logic for the `workout` command group.
///
/// A session lives under `workout.session.<id>` while in progress; on
/// completion it becomes an append-only WorkoutLog and the session key
/// is removed.
pub struct WorkoutLogic;

impl WorkoutLogic {
    pub fn start(store: &mut dyn RecordStore, workout_id: &str) -> AppResult<WorkoutSession> {
        let mut repo = WorkoutRepo::new(store);

        if repo.session(workout_id)?.is_some() {
            return Err(AppError::SessionInProgress(workout_id.to_string()));
        }

        let session = WorkoutSession::start(workout_id);
        repo.save_session(&session)?;

        success(format!("Started workout '{}'.", workout_id));
        Ok(session)
    }

    pub fn add_set(
        store: &mut dyn RecordStore,
        workout_id: &str,
        exercise: &str,
        reps: u32,
        weight_kg: Option<f64>,
    ) -> AppResult<WorkoutSession> {
        let mut repo = WorkoutRepo::new(store);

        let mut session = repo
            .session(workout_id)?
            .ok_or_else(|| AppError::NoActiveSession(workout_id.to_string()))?;

        session.sets.push(SetEntry {
            exercise: exercise.to_string(),
            reps,
            weight_kg,
        });
        repo.save_session(&session)?;

        let set_no = session.sets.len();
        match weight_kg {
            Some(w) => success(format!(
                "Set {}: {} x{} @ {:.1} kg",
                set_no, exercise, reps, w
            )),
            None => success(format!("Set {}: {} x{}", set_no, exercise, reps)),
        }

        Ok(session)
    }

    /// Complete the session: append the log, then remove the session key.
    /// Duration defaults to the elapsed session time.
    pub fn complete(
        store: &mut dyn RecordStore,
        workout_id: &str,
        duration_min: Option<u32>,
        highlight: Option<String>,
    ) -> AppResult<WorkoutLog> {
        let mut repo = WorkoutRepo::new(store);

        let session = repo
            .session(workout_id)?
            .ok_or_else(|| AppError::NoActiveSession(workout_id.to_string()))?;

        let duration = duration_min.unwrap_or_else(|| session.elapsed_min().max(1) as u32);
        let log = WorkoutLog::new(
            workout_id,
            duration,
            true,
            highlight.unwrap_or_default(),
        );

        repo.append(log.clone())?;
        repo.clear_session(workout_id)?;

        success(format!(
            "Workout '{}' completed: {} sets, {} min.",
            workout_id,
            session.sets.len(),
            duration
        ));

        Ok(log)
    }

    pub fn cancel(store: &mut dyn RecordStore, workout_id: &str) -> AppResult<()> {
        let mut repo = WorkoutRepo::new(store);

        if repo.session(workout_id)?.is_none() {
            return Err(AppError::NoActiveSession(workout_id.to_string()));
        }

        repo.clear_session(workout_id)?;
        info(format!("Cancelled session for workout '{}'.", workout_id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn start_set_complete_flow() {
        let mut store = MemoryStore::new();

        WorkoutLogic::start(&mut store, "full-body-a").unwrap();
        WorkoutLogic::add_set(&mut store, "full-body-a", "squat", 5, Some(80.0)).unwrap();
        WorkoutLogic::add_set(&mut store, "full-body-a", "bench", 8, Some(55.0)).unwrap();

        let log =
            WorkoutLogic::complete(&mut store, "full-body-a", Some(42), Some("felt strong".into()))
                .unwrap();
        assert_eq!(log.duration_min, 42);
        assert!(log.completed);

        // Session key is gone; the log survived.
        let repo = WorkoutRepo::new(&mut store);
        assert!(repo.session("full-body-a").unwrap().is_none());
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn double_start_is_rejected() {
        let mut store = MemoryStore::new();
        WorkoutLogic::start(&mut store, "push-day").unwrap();

        let err = WorkoutLogic::start(&mut store, "push-day").unwrap_err();
        assert!(matches!(err, AppError::SessionInProgress(_)));
    }

    #[test]
    fn set_without_session_is_rejected() {
        let mut store = MemoryStore::new();
        let err = WorkoutLogic::add_set(&mut store, "pull-day", "row", 10, None).unwrap_err();
        assert!(matches!(err, AppError::NoActiveSession(_)));
    }
}
