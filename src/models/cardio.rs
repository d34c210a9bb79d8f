use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardioKind {
    Zone2,
    Intervals,
    Easy,
    Other,
}

impl CardioKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardioKind::Zone2 => "zone2",
            CardioKind::Intervals => "intervals",
            CardioKind::Easy => "easy",
            CardioKind::Other => "other",
        }
    }

    /// Convert input code from CLI (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "zone2" | "z2" => Some(CardioKind::Zone2),
            "intervals" | "int" => Some(CardioKind::Intervals),
            "easy" => Some(CardioKind::Easy),
            "other" => Some(CardioKind::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CardioKind::Zone2 => "Zone 2",
            CardioKind::Intervals => "Intervals",
            CardioKind::Easy => "Easy",
            CardioKind::Other => "Other",
        }
    }
}

/// A logged cardio session, stored in `cardio.logs`. Deletable by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardioLog {
    pub id: String,
    pub logged_at: DateTime<Local>,
    pub kind: CardioKind,
    pub duration_min: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_hr: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CardioLog {
    pub fn new(
        logged_at: DateTime<Local>,
        kind: CardioKind,
        duration_min: u32,
        distance_km: Option<f64>,
        avg_hr: Option<u32>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            logged_at,
            kind,
            duration_min,
            distance_km,
            avg_hr,
            notes,
        }
    }

    pub fn date_str(&self) -> String {
        self.logged_at.format("%Y-%m-%d").to_string()
    }
}
