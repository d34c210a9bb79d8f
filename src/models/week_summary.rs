use chrono::{DateTime, Local};

/// Scalar signals derived from the lookback window. Feeds the stats
/// dashboard and the insight builder.
#[derive(Debug, Clone)]
pub struct WeekSummary {
    pub window_start: DateTime<Local>,
    pub window_end: DateTime<Local>,
    pub workouts_completed: usize,
    pub cardio_minutes: u32,
    pub checkins: usize,
    pub avg_sleep: f64,
}
