use crate::core::calculator::{cardio, sleep};
use crate::models::cardio::CardioLog;
use crate::models::checkin::CheckinLog;
use crate::models::week_summary::WeekSummary;
use crate::models::workout::WorkoutLog;
use crate::utils::date;

pub struct Core;

impl Core {
    /// Derive the scalar signals over a lookback window of `range_days`
    /// calendar days ending today.
    pub fn build_week_summary(
        workouts: &[WorkoutLog],
        cardio_logs: &[CardioLog],
        checkins: &[CheckinLog],
        range_days: usize,
    ) -> WeekSummary {
        let days = date::last_n_days(range_days.max(1));
        let window_start = date::day_start(*days.first().unwrap());
        let window_end = date::day_end(*days.last().unwrap());

        let workouts_completed = workouts
            .iter()
            .filter(|w| date::is_within_range(&w.logged_at, &window_start, &window_end))
            .count();

        let cardio_minutes =
            cardio::aggregate_cardio_minutes(cardio_logs, &window_start, &window_end);

        let in_window: Vec<CheckinLog> = checkins
            .iter()
            .filter(|c| date::is_within_range(&c.logged_at, &window_start, &window_end))
            .cloned()
            .collect();
        let avg_sleep = sleep::average_sleep_quality(&in_window);

        WeekSummary {
            window_start,
            window_end,
            workouts_completed,
            cardio_minutes,
            checkins: in_window.len(),
            avg_sleep,
        }
    }
}
