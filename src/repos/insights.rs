use crate::errors::AppResult;
use crate::models::insight::AiInsight;
use crate::repos::{UpsertOutcome, load_list};
use crate::store::{RecordStore, keys, write};

pub struct InsightRepo<'a> {
    store: &'a mut dyn RecordStore,
}

impl<'a> InsightRepo<'a> {
    pub fn new(store: &'a mut dyn RecordStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> AppResult<Vec<AiInsight>> {
        load_list(&*self.store, keys::AI_INSIGHTS)
    }

    /// One insight per ISO week: any prior entry with the same week start
    /// is replaced.
    pub fn upsert_by_week(&mut self, insight: AiInsight) -> AppResult<UpsertOutcome> {
        let week = insight.week_start;
        let insights = self.list()?;

        let had_same_week = insights.iter().any(|i| i.week_start == week);
        let mut kept: Vec<AiInsight> = insights
            .into_iter()
            .filter(|i| i.week_start != week)
            .collect();
        kept.push(insight);
        kept.sort_by_key(|i| i.week_start);

        write(self.store, keys::AI_INSIGHTS, &kept)?;

        Ok(if had_same_week {
            UpsertOutcome::Replaced
        } else {
            UpsertOutcome::Inserted
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::{Local, NaiveDate};
    use uuid::Uuid;

    fn insight(week_start: NaiveDate, title: &str) -> AiInsight {
        AiInsight {
            id: Uuid::new_v4().to_string(),
            week_start,
            title: title.to_string(),
            summary: String::new(),
            bullets: Vec::new(),
            focus: String::new(),
            created_at: Local::now(),
        }
    }

    #[test]
    fn upsert_replaces_same_week_entry() {
        let mut store = MemoryStore::new();
        let mut repo = InsightRepo::new(&mut store);
        let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

        assert_eq!(
            repo.upsert_by_week(insight(monday, "first")).unwrap(),
            UpsertOutcome::Inserted
        );
        assert_eq!(
            repo.upsert_by_week(insight(monday, "second")).unwrap(),
            UpsertOutcome::Replaced
        );

        let stored = repo.list().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].title, "second");
    }

    #[test]
    fn entries_stay_sorted_by_week() {
        let mut store = MemoryStore::new();
        let mut repo = InsightRepo::new(&mut store);

        let w2 = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        let w1 = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        repo.upsert_by_week(insight(w2, "later")).unwrap();
        repo.upsert_by_week(insight(w1, "earlier")).unwrap();

        let stored = repo.list().unwrap();
        assert_eq!(stored[0].week_start, w1);
        assert_eq!(stored[1].week_start, w2);
    }
}
