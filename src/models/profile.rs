//! Onboarding profile sections, one stored record per `onboarding.*` key.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasicsInfo {
    pub name: String,
    pub age: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalsInfo {
    pub primary_goal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizon_weeks: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FitnessInfo {
    pub experience: String,
    pub days_per_week: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preferred_styles: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LifestyleInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation_activity: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionHabitsInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meals_per_day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caffeine_per_day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alcohol_per_week: Option<u32>,
}
