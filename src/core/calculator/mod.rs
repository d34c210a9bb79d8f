pub mod cardio;
pub mod sleep;
pub mod streak;
