//! Storage key layout: string key → JSON shape, namespaced by feature.

pub const ONBOARDING_BASICS: &str = "onboarding.basics";
pub const ONBOARDING_GOALS: &str = "onboarding.goals";
pub const ONBOARDING_FITNESS: &str = "onboarding.fitness";
pub const ONBOARDING_LIFESTYLE: &str = "onboarding.lifestyle";
pub const ONBOARDING_NUTRITION: &str = "onboarding.nutrition";

pub const WORKOUT_LOGS: &str = "workout.logs";
pub const CARDIO_LOGS: &str = "cardio.logs";
pub const CHECKIN_LOGS: &str = "checkins.logs";
pub const CHECKIN_DRAFT: &str = "checkins.draft";
pub const AI_INSIGHTS: &str = "ai.insights";
pub const NUTRITION_MEALS: &str = "nutrition.meals";

const WORKOUT_SESSION_PREFIX: &str = "workout.session.";

/// Per-workout in-progress session key.
pub fn workout_session(workout_id: &str) -> String {
    format!("{}{}", WORKOUT_SESSION_PREFIX, workout_id)
}

/// The workout id of a session key, if `key` is one.
pub fn session_workout_id(key: &str) -> Option<&str> {
    key.strip_prefix(WORKOUT_SESSION_PREFIX)
}
