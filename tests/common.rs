#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Duration, Local};
use std::env;
use std::path::PathBuf;

pub fn vl() -> Command {
    cargo_bin_cmd!("vitalog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_vitalog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    std::fs::remove_file(&p).ok();
    p
}

/// "YYYY-MM-DD" for `days_ago` days before today.
pub fn day_str(days_ago: i64) -> String {
    (Local::now().date_naive() - Duration::days(days_ago))
        .format("%Y-%m-%d")
        .to_string()
}

/// Initialize the DB schema in test mode.
pub fn init_db(db_path: &str) {
    vl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Seed one cardio session via the CLI.
pub fn seed_cardio(db_path: &str, date: &str, minutes: &str) {
    vl().args([
        "--db", db_path, "cardio", "add", "--kind", "zone2", "--duration", minutes, "--date", date,
    ])
    .assert()
    .success();
}

/// Seed one daily check-in via the CLI.
pub fn seed_checkin(db_path: &str, date: &str, sleep: &str) {
    vl().args([
        "--db", db_path, "checkin", "add", "--mood", "good", "--energy", "6", "--stress", "4",
        "--sleep", sleep, "--date", date,
    ])
    .assert()
    .success();
}

/// Seed one completed workout via the CLI session flow.
pub fn seed_workout(db_path: &str, workout_id: &str) {
    vl().args(["--db", db_path, "workout", "start", workout_id])
        .assert()
        .success();

    vl().args([
        "--db", db_path, "workout", "set", workout_id, "squat", "--reps", "5", "--weight", "80",
    ])
    .assert()
    .success();

    vl().args([
        "--db",
        db_path,
        "workout",
        "done",
        workout_id,
        "--duration",
        "40",
        "--highlight",
        "solid session",
    ])
    .assert()
    .success();
}
