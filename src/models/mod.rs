pub mod cardio;
pub mod checkin;
pub mod insight;
pub mod meal;
pub mod profile;
pub mod week_summary;
pub mod workout;
