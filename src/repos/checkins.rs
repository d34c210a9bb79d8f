use crate::errors::AppResult;
use crate::models::checkin::{CheckinDraft, CheckinLog};
use crate::repos::{UpsertOutcome, load_list};
use crate::store::{RecordStore, keys, read_or_default, write};

pub struct CheckinRepo<'a> {
    store: &'a mut dyn RecordStore,
}

impl<'a> CheckinRepo<'a> {
    pub fn new(store: &'a mut dyn RecordStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> AppResult<Vec<CheckinLog>> {
        load_list(&*self.store, keys::CHECKIN_LOGS)
    }

    /// At most one check-in per calendar day: any existing record for the
    /// same day is replaced by the new one.
    pub fn upsert_by_day(&mut self, log: CheckinLog) -> AppResult<UpsertOutcome> {
        let day = log.day_key();
        let logs = self.list()?;

        let had_same_day = logs.iter().any(|c| c.day_key() == day);
        let mut kept: Vec<CheckinLog> =
            logs.into_iter().filter(|c| c.day_key() != day).collect();
        kept.push(log);

        write(self.store, keys::CHECKIN_LOGS, &kept)?;

        Ok(if had_same_day {
            UpsertOutcome::Replaced
        } else {
            UpsertOutcome::Inserted
        })
    }

    /// Today's unsaved draft. A broken draft must never block a check-in,
    /// so this is the one read that silently degrades to empty.
    pub fn draft(&self) -> CheckinDraft {
        read_or_default(&*self.store, keys::CHECKIN_DRAFT, CheckinDraft::default())
    }

    pub fn save_draft(&mut self, draft: &CheckinDraft) -> AppResult<()> {
        write(self.store, keys::CHECKIN_DRAFT, draft)
    }

    pub fn clear_draft(&mut self) -> AppResult<()> {
        self.store.remove(keys::CHECKIN_DRAFT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::checkin::Mood;
    use crate::store::MemoryStore;
    use chrono::{Duration, Local};

    fn checkin(days_ago: i64, sleep: u8) -> CheckinLog {
        CheckinLog::new(
            Local::now() - Duration::days(days_ago),
            Mood::Good,
            6,
            4,
            sleep,
            None,
        )
    }

    #[test]
    fn upsert_replaces_same_day_record() {
        let mut store = MemoryStore::new();
        let mut repo = CheckinRepo::new(&mut store);

        assert_eq!(
            repo.upsert_by_day(checkin(0, 5)).unwrap(),
            UpsertOutcome::Inserted
        );
        assert_eq!(
            repo.upsert_by_day(checkin(0, 8)).unwrap(),
            UpsertOutcome::Replaced
        );

        let logs = repo.list().unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].sleep_quality, 8);
    }

    #[test]
    fn upsert_keeps_other_days() {
        let mut store = MemoryStore::new();
        let mut repo = CheckinRepo::new(&mut store);

        repo.upsert_by_day(checkin(1, 6)).unwrap();
        repo.upsert_by_day(checkin(0, 7)).unwrap();

        assert_eq!(repo.list().unwrap().len(), 2);
    }

    #[test]
    fn draft_degrades_to_empty_on_corruption() {
        let mut store = MemoryStore::new();
        store.seed_raw(keys::CHECKIN_DRAFT, "][");

        let repo = CheckinRepo::new(&mut store);
        assert!(repo.draft().is_empty());
    }
}
