//! Flat row structures for export.

use crate::models::cardio::CardioLog;
use crate::models::checkin::CheckinLog;
use crate::models::meal::MealEntry;
use crate::models::workout::WorkoutLog;
use crate::utils::formatting::{fmt_opt, fmt_opt_f1};
use serde::Serialize;

#[derive(Serialize, Clone, Debug)]
pub struct WorkoutExport {
    pub id: String,
    pub date: String,
    pub workout_id: String,
    pub duration_min: u32,
    pub completed: bool,
    pub highlight: String,
}

impl From<&WorkoutLog> for WorkoutExport {
    fn from(w: &WorkoutLog) -> Self {
        Self {
            id: w.id.clone(),
            date: w.logged_at.to_rfc3339(),
            workout_id: w.workout_id.clone(),
            duration_min: w.duration_min,
            completed: w.completed,
            highlight: w.highlight.clone(),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct CardioExport {
    pub id: String,
    pub date: String,
    pub kind: String,
    pub duration_min: u32,
    pub distance_km: Option<f64>,
    pub avg_hr: Option<u32>,
    pub notes: Option<String>,
}

impl From<&CardioLog> for CardioExport {
    fn from(c: &CardioLog) -> Self {
        Self {
            id: c.id.clone(),
            date: c.logged_at.to_rfc3339(),
            kind: c.kind.as_str().to_string(),
            duration_min: c.duration_min,
            distance_km: c.distance_km,
            avg_hr: c.avg_hr,
            notes: c.notes.clone(),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct CheckinExport {
    pub id: String,
    pub date: String,
    pub mood: String,
    pub energy: u8,
    pub stress: u8,
    pub sleep_quality: u8,
    pub notes: Option<String>,
}

impl From<&CheckinLog> for CheckinExport {
    fn from(c: &CheckinLog) -> Self {
        Self {
            id: c.id.clone(),
            date: c.logged_at.to_rfc3339(),
            mood: c.mood.as_str().to_string(),
            energy: c.energy,
            stress: c.stress,
            sleep_quality: c.sleep_quality,
            notes: c.notes.clone(),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct MealExport {
    pub id: String,
    pub date: String,
    pub name: String,
    pub calories: u32,
    pub protein_g: Option<u32>,
    pub carbs_g: Option<u32>,
    pub fat_g: Option<u32>,
}

impl From<&MealEntry> for MealExport {
    fn from(m: &MealEntry) -> Self {
        Self {
            id: m.id.clone(),
            date: m.logged_at.to_rfc3339(),
            name: m.name.clone(),
            calories: m.calories,
            protein_g: m.protein_g,
            carbs_g: m.carbs_g,
            fat_g: m.fat_g,
        }
    }
}

/// One exported record list, flattened.
#[derive(Clone, Debug)]
pub enum Dataset {
    Workouts(Vec<WorkoutExport>),
    Cardio(Vec<CardioExport>),
    Checkins(Vec<CheckinExport>),
    Meals(Vec<MealExport>),
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        match self {
            Dataset::Workouts(v) => v.is_empty(),
            Dataset::Cardio(v) => v.is_empty(),
            Dataset::Checkins(v) => v.is_empty(),
            Dataset::Meals(v) => v.is_empty(),
        }
    }

    pub fn headers(&self) -> Vec<&'static str> {
        match self {
            Dataset::Workouts(_) => {
                vec!["id", "date", "workout_id", "duration_min", "completed", "highlight"]
            }
            Dataset::Cardio(_) => vec![
                "id",
                "date",
                "kind",
                "duration_min",
                "distance_km",
                "avg_hr",
                "notes",
            ],
            Dataset::Checkins(_) => vec![
                "id",
                "date",
                "mood",
                "energy",
                "stress",
                "sleep_quality",
                "notes",
            ],
            Dataset::Meals(_) => vec![
                "id",
                "date",
                "name",
                "calories",
                "protein_g",
                "carbs_g",
                "fat_g",
            ],
        }
    }

    /// String table for the XLSX writer.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        match self {
            Dataset::Workouts(v) => v
                .iter()
                .map(|r| {
                    vec![
                        r.id.clone(),
                        r.date.clone(),
                        r.workout_id.clone(),
                        r.duration_min.to_string(),
                        r.completed.to_string(),
                        r.highlight.clone(),
                    ]
                })
                .collect(),
            Dataset::Cardio(v) => v
                .iter()
                .map(|r| {
                    vec![
                        r.id.clone(),
                        r.date.clone(),
                        r.kind.clone(),
                        r.duration_min.to_string(),
                        fmt_opt_f1(&r.distance_km),
                        fmt_opt(&r.avg_hr),
                        r.notes.clone().unwrap_or_default(),
                    ]
                })
                .collect(),
            Dataset::Checkins(v) => v
                .iter()
                .map(|r| {
                    vec![
                        r.id.clone(),
                        r.date.clone(),
                        r.mood.clone(),
                        r.energy.to_string(),
                        r.stress.to_string(),
                        r.sleep_quality.to_string(),
                        r.notes.clone().unwrap_or_default(),
                    ]
                })
                .collect(),
            Dataset::Meals(v) => v
                .iter()
                .map(|r| {
                    vec![
                        r.id.clone(),
                        r.date.clone(),
                        r.name.clone(),
                        r.calories.to_string(),
                        fmt_opt(&r.protein_g),
                        fmt_opt(&r.carbs_g),
                        fmt_opt(&r.fat_g),
                    ]
                })
                .collect(),
        }
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        match self {
            Dataset::Workouts(v) => serde_json::to_string_pretty(v),
            Dataset::Cardio(v) => serde_json::to_string_pretty(v),
            Dataset::Checkins(v) => serde_json::to_string_pretty(v),
            Dataset::Meals(v) => serde_json::to_string_pretty(v),
        }
    }
}
