//! Weekly insight builder: deterministic threshold rules over the
//! lookback window, persisted one-per-ISO-week.

use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::cardio::CardioLog;
use crate::models::checkin::CheckinLog;
use crate::models::insight::{AiInsight, InsightDraft};
use crate::models::week_summary::WeekSummary;
use crate::models::workout::WorkoutLog;
use crate::repos::{InsightRepo, UpsertOutcome};
use crate::store::RecordStore;
use crate::utils::date;
use chrono::Local;
use uuid::Uuid;

pub const WEEKLY_WORKOUT_TARGET: usize = 4;
pub const WEEKLY_CARDIO_TARGET_MIN: u32 = 90;
pub const SLEEP_CAUTION_THRESHOLD: f64 = 5.0;
const MAX_BULLETS: usize = 3;

pub struct InsightLogic;

impl InsightLogic {
    /// Build the draft insight from the three record sets. Pure apart
    /// from the clock driving the lookback window.
    pub fn draft(
        workouts: &[WorkoutLog],
        cardio_logs: &[CardioLog],
        checkins: &[CheckinLog],
        range_days: usize,
    ) -> InsightDraft {
        let summary = Core::build_week_summary(workouts, cardio_logs, checkins, range_days);
        Self::draft_from_summary(&summary)
    }

    pub(crate) fn draft_from_summary(s: &WeekSummary) -> InsightDraft {
        let workouts = s.workouts_completed;
        let minutes = s.cardio_minutes;
        let avg_sleep = s.avg_sleep;

        // Bullets in fixed insertion order: workouts, cardio, sleep.
        let mut bullets = Vec::new();

        if workouts >= WEEKLY_WORKOUT_TARGET {
            bullets.push(format!(
                "Strong week: {} strength sessions completed.",
                workouts
            ));
        } else if workouts >= 1 {
            bullets.push(format!(
                "{} strength session(s) logged, {} more to reach {}.",
                workouts,
                WEEKLY_WORKOUT_TARGET - workouts,
                WEEKLY_WORKOUT_TARGET
            ));
        } else {
            bullets.push("No strength sessions yet this week. A short first session counts.".into());
        }

        if minutes >= WEEKLY_CARDIO_TARGET_MIN {
            bullets.push(format!("Cardio on target: {} minutes this week.", minutes));
        } else if minutes >= 1 {
            bullets.push(format!(
                "{} cardio minutes so far, {} short of the {} minute target.",
                minutes,
                WEEKLY_CARDIO_TARGET_MIN - minutes,
                WEEKLY_CARDIO_TARGET_MIN
            ));
        } else {
            bullets.push("No cardio logged yet. One easy session is a good start.".into());
        }

        // Sleep bullet only when at least one check-in contributed a score.
        if avg_sleep > 0.0 {
            if avg_sleep < SLEEP_CAUTION_THRESHOLD {
                bullets.push(format!(
                    "Average sleep quality {:.1}/10 is low. Protect your wind-down.",
                    avg_sleep
                ));
            } else {
                bullets.push(format!(
                    "Sleep quality averaging {:.1}/10, keep the routine.",
                    avg_sleep
                ));
            }
        }

        bullets.truncate(MAX_BULLETS);

        let on_target =
            workouts >= WEEKLY_WORKOUT_TARGET && minutes >= WEEKLY_CARDIO_TARGET_MIN;

        let (title, summary) = if on_target {
            (
                "A strong training week".to_string(),
                "You hit both the strength and cardio targets this week. Consistency like this compounds."
                    .to_string(),
            )
        } else {
            (
                "Room to build this week".to_string(),
                "You have room to improve on this week's targets. Small additions move the needle."
                    .to_string(),
            )
        };

        // Focus priority chain: cardio gap, then sleep, then maintenance.
        // Workout count deliberately does not participate here.
        let focus = if minutes < WEEKLY_CARDIO_TARGET_MIN {
            format!(
                "Focus: close the cardio gap with {} more minutes next week.",
                WEEKLY_CARDIO_TARGET_MIN - minutes
            )
        } else if avg_sleep < SLEEP_CAUTION_THRESHOLD {
            "Focus: prioritize recovery. Earlier nights and a consistent wind-down.".to_string()
        } else {
            "Focus: maintain the rhythm you have built.".to_string()
        };

        InsightDraft {
            title,
            summary,
            bullets,
            focus,
        }
    }

    /// Build this week's insight and persist it, replacing any existing
    /// entry for the same week start.
    pub fn generate_and_store(
        store: &mut dyn RecordStore,
        workouts: &[WorkoutLog],
        cardio_logs: &[CardioLog],
        checkins: &[CheckinLog],
        range_days: usize,
    ) -> AppResult<(AiInsight, UpsertOutcome)> {
        let draft = Self::draft(workouts, cardio_logs, checkins, range_days);

        let insight = AiInsight {
            id: Uuid::new_v4().to_string(),
            week_start: date::week_start(date::today()),
            title: draft.title,
            summary: draft.summary,
            bullets: draft.bullets,
            focus: draft.focus,
            created_at: Local::now(),
        };

        let mut repo = InsightRepo::new(store);
        let outcome = repo.upsert_by_week(insight.clone())?;
        Ok((insight, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cardio::CardioKind;
    use crate::models::checkin::Mood;
    use chrono::Duration;

    fn summary(workouts: usize, minutes: u32, avg_sleep: f64) -> WeekSummary {
        let now = Local::now();
        WeekSummary {
            window_start: now - Duration::days(6),
            window_end: now,
            workouts_completed: workouts,
            cardio_minutes: minutes,
            checkins: if avg_sleep > 0.0 { 1 } else { 0 },
            avg_sleep,
        }
    }

    #[test]
    fn on_target_week_without_checkins_has_two_bullets() {
        let draft = InsightLogic::draft_from_summary(&summary(4, 90, 0.0));

        assert_eq!(draft.title, "A strong training week");
        assert!(draft.summary.contains("hit both"));
        assert_eq!(draft.bullets.len(), 2);
        assert!(draft.bullets[0].contains("4 strength sessions"));
        assert!(draft.bullets[1].contains("90 minutes"));
    }

    #[test]
    fn empty_week_with_poor_sleep_has_three_bullets_and_cardio_focus() {
        let draft = InsightLogic::draft_from_summary(&summary(0, 0, 3.0));

        assert_eq!(draft.bullets.len(), 3);
        assert!(draft.bullets[0].contains("No strength sessions"));
        assert!(draft.bullets[1].contains("No cardio"));
        assert!(draft.bullets[2].contains("3.0/10 is low"));

        // Cardio gap outranks the sleep condition in the focus chain.
        assert!(draft.focus.contains("cardio gap"));
        assert_eq!(draft.title, "Room to build this week");
    }

    #[test]
    fn partial_progress_names_count_and_gap() {
        let draft = InsightLogic::draft_from_summary(&summary(2, 45, 0.0));

        assert!(draft.bullets[0].contains("2 strength session(s)"));
        assert!(draft.bullets[0].contains("2 more"));
        assert!(draft.bullets[1].contains("45 cardio minutes"));
        assert!(draft.bullets[1].contains("45 short"));
    }

    #[test]
    fn focus_ignores_workout_count() {
        // Zero workouts but cardio on target and good sleep: maintenance.
        let draft = InsightLogic::draft_from_summary(&summary(0, 120, 8.0));
        assert!(draft.focus.contains("maintain"));

        // Cardio on target, low sleep: recovery.
        let draft = InsightLogic::draft_from_summary(&summary(4, 120, 4.0));
        assert!(draft.focus.contains("recovery"));
    }

    #[test]
    fn bullets_never_exceed_three() {
        let draft = InsightLogic::draft_from_summary(&summary(5, 200, 9.0));
        assert_eq!(draft.bullets.len(), 3);
    }

    #[test]
    fn draft_over_live_records_counts_in_window_logs() {
        let now = Local::now();
        let workouts: Vec<WorkoutLog> = (0..4)
            .map(|_| WorkoutLog::new("full-body-a", 40, true, String::new()))
            .collect();
        let cardio_logs = vec![CardioLog::new(
            now - Duration::minutes(30),
            CardioKind::Zone2,
            90,
            None,
            None,
            None,
        )];
        let checkins = vec![CheckinLog::new(now, Mood::Good, 6, 3, 8, None)];

        let draft = InsightLogic::draft(&workouts, &cardio_logs, &checkins, 7);
        assert_eq!(draft.title, "A strong training week");
        assert_eq!(draft.bullets.len(), 3);
    }
}
