use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A logged meal, stored in `nutrition.meals`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealEntry {
    pub id: String,
    pub logged_at: DateTime<Local>,
    pub name: String,
    pub calories: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<u32>,
}

impl MealEntry {
    pub fn new(
        logged_at: DateTime<Local>,
        name: String,
        calories: u32,
        protein_g: Option<u32>,
        carbs_g: Option<u32>,
        fat_g: Option<u32>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            logged_at,
            name,
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    pub fn date_str(&self) -> String {
        self.logged_at.format("%Y-%m-%d").to_string()
    }
}
