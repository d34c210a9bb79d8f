use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A generated weekly insight, stored in `ai.insights`.
/// One per ISO week; the repository enforces this via upsert-by-week-start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiInsight {
    pub id: String,
    pub week_start: NaiveDate,
    pub title: String,
    pub summary: String,
    pub bullets: Vec<String>,
    pub focus: String,
    pub created_at: DateTime<Local>,
}

/// The pure output of the insight builder: no id, week start, or
/// creation timestamp. Those are attached by the persisting logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightDraft {
    pub title: String,
    pub summary: String,
    pub bullets: Vec<String>,
    pub focus: String,
}
