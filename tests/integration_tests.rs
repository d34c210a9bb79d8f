use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{day_str, init_db, seed_cardio, seed_checkin, seed_workout, setup_test_db, vl};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    vl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_cardio_add_and_list() {
    let db_path = setup_test_db("cardio_add_and_list");
    init_db(&db_path);

    seed_cardio(&db_path, &day_str(0), "35");
    seed_cardio(&db_path, &day_str(1), "25");

    vl().args(["--db", &db_path, "cardio", "list"])
        .assert()
        .success()
        .stdout(contains("Zone 2").and(contains("2 session(s), 60 min total.")));
}

#[test]
fn test_cardio_invalid_kind_is_rejected() {
    let db_path = setup_test_db("cardio_invalid_kind");
    init_db(&db_path);

    vl().args([
        "--db", &db_path, "cardio", "add", "--kind", "sprinting", "--duration", "20",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid cardio kind"));
}

#[test]
fn test_checkin_add_and_list() {
    let db_path = setup_test_db("checkin_add_and_list");
    init_db(&db_path);

    seed_checkin(&db_path, &day_str(0), "7");

    vl().args(["--db", &db_path, "checkin", "list"])
        .assert()
        .success()
        .stdout(contains("good").and(contains("1 check-in(s).")));
}

#[test]
fn test_checkin_same_day_is_replaced() {
    let db_path = setup_test_db("checkin_same_day_replaced");
    init_db(&db_path);

    seed_checkin(&db_path, &day_str(0), "4");

    vl().args([
        "--db",
        &db_path,
        "checkin",
        "add",
        "--mood",
        "great",
        "--energy",
        "8",
        "--stress",
        "2",
        "--sleep",
        "9",
        "--date",
        &day_str(0),
    ])
    .assert()
    .success()
    .stdout(contains("replaced"));

    vl().args(["--db", &db_path, "checkin", "list"])
        .assert()
        .success()
        .stdout(contains("great").and(contains("1 check-in(s).")));
}

#[test]
fn test_checkin_invalid_mood_is_rejected() {
    let db_path = setup_test_db("checkin_invalid_mood");
    init_db(&db_path);

    vl().args([
        "--db", &db_path, "checkin", "add", "--mood", "ecstatic", "--energy", "8", "--stress",
        "2", "--sleep", "9",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid mood"));
}

#[test]
fn test_checkin_draft_flow() {
    let db_path = setup_test_db("checkin_draft_flow");
    init_db(&db_path);

    vl().args(["--db", &db_path, "checkin", "draft", "--mood", "ok"])
        .assert()
        .success()
        .stdout(contains("Draft updated"));

    // Incomplete draft cannot be promoted yet
    vl().args(["--db", &db_path, "checkin", "add", "--from-draft"])
        .assert()
        .failure()
        .stderr(contains("Incomplete check-in"));

    vl().args([
        "--db", &db_path, "checkin", "draft", "--energy", "5", "--stress", "5", "--sleep", "6",
    ])
    .assert()
    .success();

    vl().args(["--db", &db_path, "checkin", "add", "--from-draft"])
        .assert()
        .success()
        .stdout(contains("Check-in saved"));

    vl().args(["--db", &db_path, "checkin", "list"])
        .assert()
        .success()
        .stdout(contains("1 check-in(s)."));
}

#[test]
fn test_workout_session_flow() {
    let db_path = setup_test_db("workout_session_flow");
    init_db(&db_path);

    seed_workout(&db_path, "full-body-a");

    vl().args(["--db", &db_path, "workout", "list"])
        .assert()
        .success()
        .stdout(contains("full-body-a").and(contains("solid session")));
}

#[test]
fn test_workout_done_requires_started_session() {
    let db_path = setup_test_db("workout_done_requires_session");
    init_db(&db_path);

    vl().args(["--db", &db_path, "workout", "done", "push-day"])
        .assert()
        .failure()
        .stderr(contains("No active session"));
}

#[test]
fn test_workout_double_start_is_rejected() {
    let db_path = setup_test_db("workout_double_start");
    init_db(&db_path);

    vl().args(["--db", &db_path, "workout", "start", "push-day"])
        .assert()
        .success();

    vl().args(["--db", &db_path, "workout", "start", "push-day"])
        .assert()
        .failure()
        .stderr(contains("already in progress"));
}

#[test]
fn test_stats_reports_streak_and_targets() {
    let db_path = setup_test_db("stats_reports_streak");
    init_db(&db_path);

    seed_checkin(&db_path, &day_str(0), "8");
    seed_checkin(&db_path, &day_str(1), "6");
    seed_cardio(&db_path, &day_str(0), "45");

    vl().args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(
            contains("Check-in streak:")
                .and(contains("2 day(s)"))
                .and(contains("of 90 target")),
        );
}

#[test]
fn test_meal_add_and_list() {
    let db_path = setup_test_db("meal_add_and_list");
    init_db(&db_path);

    vl().args([
        "--db", &db_path, "meal", "add", "--name", "oats and berries", "--calories", "420",
        "--protein", "18",
    ])
    .assert()
    .success();

    vl().args(["--db", &db_path, "meal", "list"])
        .assert()
        .success()
        .stdout(contains("oats and berries").and(contains("420 kcal total.")));
}

#[test]
fn test_onboard_sections_roundtrip() {
    let db_path = setup_test_db("onboard_sections");
    init_db(&db_path);

    vl().args([
        "--db", &db_path, "onboard", "basics", "--name", "Jo", "--age", "41", "--height", "178",
    ])
    .assert()
    .success();

    vl().args([
        "--db", &db_path, "onboard", "goals", "--primary", "longevity",
    ])
    .assert()
    .success();

    vl().args(["--db", &db_path, "onboard", "show"])
        .assert()
        .success()
        .stdout(
            contains("Jo")
                .and(contains("longevity"))
                .and(contains("(not set)")),
        );
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("backup_copies_db");
    init_db(&db_path);

    let backup_path = common::temp_out("backup_copies_db", "sqlite");
    vl().args(["--db", &db_path, "backup", "--file", &backup_path])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&backup_path).exists());
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records_operations");
    init_db(&db_path);

    seed_cardio(&db_path, &day_str(0), "30");

    vl().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log").and(contains("cardio")));
}
