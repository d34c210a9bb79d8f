use crate::core::cardio::resolve_timestamp;
use crate::errors::{AppError, AppResult};
use crate::models::checkin::{CheckinDraft, CheckinLog, Mood};
use crate::repos::{CheckinRepo, UpsertOutcome};
use crate::store::RecordStore;
use crate::ui::messages::{info, success};
use crate::utils::date;

pub struct CheckinLogic;

impl CheckinLogic {
    /// Save a full daily check-in. Replaces any existing record for the
    /// same calendar day; a draft for today is consumed by the save.
    #[allow(clippy::too_many_arguments)]
    pub fn add(
        store: &mut dyn RecordStore,
        mood_code: &str,
        energy: u8,
        stress: u8,
        sleep_quality: u8,
        notes: Option<String>,
        when: Option<&String>,
    ) -> AppResult<(CheckinLog, UpsertOutcome)> {
        let mood =
            Mood::from_code(mood_code).ok_or_else(|| AppError::InvalidMood(mood_code.to_string()))?;

        for (label, v) in [("energy", energy), ("stress", stress), ("sleep", sleep_quality)] {
            if v > 10 {
                return Err(AppError::InvalidScore(format!("{}={}", label, v)));
            }
        }

        let logged_at = resolve_timestamp(when)?;
        let log = CheckinLog::new(logged_at, mood, energy, stress, sleep_quality, notes);
        let day = log.day_key();

        let mut repo = CheckinRepo::new(store);
        let outcome = repo.upsert_by_day(log.clone())?;

        if day == date::today().format("%Y-%m-%d").to_string() {
            repo.clear_draft()?;
        }

        match outcome {
            UpsertOutcome::Inserted => success(format!("Check-in saved for {}.", day)),
            UpsertOutcome::Replaced => {
                success(format!("Check-in for {} replaced.", day));
            }
        }

        Ok((log, outcome))
    }

    /// Merge partial fields into today's draft.
    pub fn save_draft(store: &mut dyn RecordStore, partial: CheckinDraft) -> AppResult<CheckinDraft> {
        let mut repo = CheckinRepo::new(store);

        let mut draft = repo.draft();
        draft.merge(partial);
        repo.save_draft(&draft)?;

        info("Draft updated. Save it with 'vitalog checkin add'.");
        Ok(draft)
    }

    /// Promote the stored draft to a full check-in, if complete.
    pub fn add_from_draft(store: &mut dyn RecordStore) -> AppResult<(CheckinLog, UpsertOutcome)> {
        let draft = CheckinRepo::new(store).draft();

        let mood = draft
            .mood
            .ok_or_else(|| AppError::IncompleteCheckin("missing mood".into()))?;
        let energy = draft
            .energy
            .ok_or_else(|| AppError::IncompleteCheckin("missing energy".into()))?;
        let stress = draft
            .stress
            .ok_or_else(|| AppError::IncompleteCheckin("missing stress".into()))?;
        let sleep = draft
            .sleep_quality
            .ok_or_else(|| AppError::IncompleteCheckin("missing sleep".into()))?;

        Self::add(store, mood.as_str(), energy, stress, sleep, draft.notes, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn add_clears_todays_draft() {
        let mut store = MemoryStore::new();

        CheckinLogic::save_draft(
            &mut store,
            CheckinDraft {
                mood: Some(Mood::Ok),
                ..Default::default()
            },
        )
        .unwrap();

        CheckinLogic::add(&mut store, "good", 6, 4, 7, None, None).unwrap();

        let repo = CheckinRepo::new(&mut store);
        assert!(repo.draft().is_empty());
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn incomplete_draft_cannot_be_promoted() {
        let mut store = MemoryStore::new();

        CheckinLogic::save_draft(
            &mut store,
            CheckinDraft {
                mood: Some(Mood::Great),
                energy: Some(8),
                ..Default::default()
            },
        )
        .unwrap();

        let err = CheckinLogic::add_from_draft(&mut store).unwrap_err();
        assert!(matches!(err, AppError::IncompleteCheckin(_)));
    }

    #[test]
    fn complete_draft_promotes_and_clears() {
        let mut store = MemoryStore::new();

        CheckinLogic::save_draft(
            &mut store,
            CheckinDraft {
                mood: Some(Mood::Low),
                energy: Some(3),
                stress: Some(7),
                sleep_quality: Some(4),
                notes: Some("rough night".into()),
            },
        )
        .unwrap();

        let (log, outcome) = CheckinLogic::add_from_draft(&mut store).unwrap();
        assert_eq!(outcome, UpsertOutcome::Inserted);
        assert_eq!(log.mood, Mood::Low);
        assert_eq!(log.notes.as_deref(), Some("rough night"));

        assert!(CheckinRepo::new(&mut store).draft().is_empty());
    }

    #[test]
    fn scores_above_ten_are_rejected() {
        let mut store = MemoryStore::new();
        let err = CheckinLogic::add(&mut store, "ok", 11, 4, 7, None, None).unwrap_err();
        assert!(matches!(err, AppError::InvalidScore(_)));
    }
}
