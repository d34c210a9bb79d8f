use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Five-value mood scale used by the daily check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Awful,
    Low,
    Ok,
    Good,
    Great,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Awful => "awful",
            Mood::Low => "low",
            Mood::Ok => "ok",
            Mood::Good => "good",
            Mood::Great => "great",
        }
    }

    /// Convert input code from CLI: a name or a 1-5 rank.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "awful" | "1" => Some(Mood::Awful),
            "low" | "2" => Some(Mood::Low),
            "ok" | "3" => Some(Mood::Ok),
            "good" | "4" => Some(Mood::Good),
            "great" | "5" => Some(Mood::Great),
            _ => None,
        }
    }
}

/// A daily check-in, stored in `checkins.logs`.
/// At most one per calendar day; the repository enforces this via
/// upsert-by-day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinLog {
    pub id: String,
    pub logged_at: DateTime<Local>,
    pub mood: Mood,
    pub energy: u8,
    pub stress: u8,
    pub sleep_quality: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CheckinLog {
    pub fn new(
        logged_at: DateTime<Local>,
        mood: Mood,
        energy: u8,
        stress: u8,
        sleep_quality: u8,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            logged_at,
            mood,
            energy,
            stress,
            sleep_quality,
            notes,
        }
    }

    /// Calendar-day key, the natural uniqueness key of a check-in.
    pub fn day_key(&self) -> String {
        self.logged_at.format("%Y-%m-%d").to_string()
    }
}

/// Today's unsaved check-in, stored under `checkins.draft` and removed
/// when the full check-in is saved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckinDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_quality: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CheckinDraft {
    pub fn is_empty(&self) -> bool {
        self.mood.is_none()
            && self.energy.is_none()
            && self.stress.is_none()
            && self.sleep_quality.is_none()
            && self.notes.is_none()
    }

    /// Overlay `other` on top of this draft, field by field.
    pub fn merge(&mut self, other: CheckinDraft) {
        if other.mood.is_some() {
            self.mood = other.mood;
        }
        if other.energy.is_some() {
            self.energy = other.energy;
        }
        if other.stress.is_some() {
            self.stress = other.stress;
        }
        if other.sleep_quality.is_some() {
            self.sleep_quality = other.sleep_quality;
        }
        if other.notes.is_some() {
            self.notes = other.notes;
        }
    }
}
