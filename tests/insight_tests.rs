use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{day_str, init_db, seed_cardio, seed_checkin, seed_workout, setup_test_db, vl};

#[test]
fn test_on_target_week_yields_positive_insight() {
    let db_path = setup_test_db("insight_on_target");
    init_db(&db_path);

    for i in 1..=4 {
        seed_workout(&db_path, &format!("workout-{}", i));
    }
    seed_cardio(&db_path, &day_str(0), "60");
    seed_cardio(&db_path, &day_str(1), "30");

    vl().args(["--db", &db_path, "insight", "generate"])
        .assert()
        .success()
        .stdout(
            contains("A strong training week")
                .and(contains("4 strength sessions"))
                .and(contains("90 minutes")),
        );
}

#[test]
fn test_quiet_week_yields_gap_messages() {
    let db_path = setup_test_db("insight_quiet_week");
    init_db(&db_path);

    seed_checkin(&db_path, &day_str(0), "3");

    vl().args(["--db", &db_path, "insight", "generate"])
        .assert()
        .success()
        .stdout(
            contains("Room to build this week")
                .and(contains("No strength sessions"))
                .and(contains("No cardio"))
                .and(contains("is low"))
                // cardio gap outranks sleep in the focus chain
                .and(contains("close the cardio gap")),
        );
}

#[test]
fn test_regenerating_replaces_the_week_entry() {
    let db_path = setup_test_db("insight_regenerate");
    init_db(&db_path);

    seed_cardio(&db_path, &day_str(0), "45");

    vl().args(["--db", &db_path, "insight", "generate"])
        .assert()
        .success();

    vl().args(["--db", &db_path, "insight", "generate"])
        .assert()
        .success()
        .stdout(contains("Replaced this week's previous insight."));

    vl().args(["--db", &db_path, "insight", "list"])
        .assert()
        .success()
        .stdout(contains("1 insight(s)."));
}

#[test]
fn test_progress_bullets_name_count_and_gap() {
    let db_path = setup_test_db("insight_progress_bullets");
    init_db(&db_path);

    seed_workout(&db_path, "full-body-a");
    seed_workout(&db_path, "full-body-b");
    seed_cardio(&db_path, &day_str(0), "45");

    vl().args(["--db", &db_path, "insight", "generate"])
        .assert()
        .success()
        .stdout(
            contains("2 strength session(s) logged, 2 more to reach 4.")
                .and(contains("45 cardio minutes so far, 45 short of the 90 minute target.")),
        );
}
