use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed workout session, appended to `workout.logs`.
/// Append-only: the system never mutates a stored log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLog {
    pub id: String,
    pub workout_id: String,
    pub logged_at: DateTime<Local>,
    pub duration_min: u32,
    pub completed: bool,
    pub highlight: String,
}

impl WorkoutLog {
    pub fn new(workout_id: &str, duration_min: u32, completed: bool, highlight: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            workout_id: workout_id.to_string(),
            logged_at: Local::now(),
            duration_min,
            completed,
            highlight,
        }
    }

    pub fn date_str(&self) -> String {
        self.logged_at.format("%Y-%m-%d").to_string()
    }
}

/// One logged set inside an in-progress session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetEntry {
    pub exercise: String,
    pub reps: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
}

/// In-progress session state, stored under `workout.session.<workout_id>`
/// and removed when the session completes or is cancelled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub workout_id: String,
    pub started_at: DateTime<Local>,
    pub sets: Vec<SetEntry>,
}

impl WorkoutSession {
    pub fn start(workout_id: &str) -> Self {
        Self {
            workout_id: workout_id.to_string(),
            started_at: Local::now(),
            sets: Vec::new(),
        }
    }

    /// Minutes elapsed since the session started.
    pub fn elapsed_min(&self) -> i64 {
        (Local::now() - self.started_at).num_minutes()
    }
}
