use predicates::str::contains;

mod common;
use common::{day_str, init_db, seed_cardio, seed_checkin, setup_test_db, temp_out, vl};

#[test]
fn test_export_cardio_csv() {
    let db_path = setup_test_db("export_cardio_csv");
    init_db(&db_path);

    seed_cardio(&db_path, &day_str(0), "40");
    seed_cardio(&db_path, &day_str(2), "20");

    let out = temp_out("export_cardio_csv", "csv");
    vl().args([
        "--db", &db_path, "export", "--data", "cardio", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = std::fs::read_to_string(&out).expect("read exported csv");
    assert!(content.lines().next().unwrap().starts_with("id,date,kind"));
    assert_eq!(content.lines().count(), 3); // header + 2 rows
}

#[test]
fn test_export_checkins_json_parses() {
    let db_path = setup_test_db("export_checkins_json");
    init_db(&db_path);

    seed_checkin(&db_path, &day_str(0), "7");

    let out = temp_out("export_checkins_json", "json");
    vl().args([
        "--db", &db_path, "export", "--data", "checkins", "--format", "json", "--file", &out,
    ])
    .assert()
    .success();

    let content = std::fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(1));
    assert_eq!(parsed[0]["sleep_quality"], 7);
}

#[test]
fn test_export_xlsx_writes_file() {
    let db_path = setup_test_db("export_xlsx_writes");
    init_db(&db_path);

    seed_cardio(&db_path, &day_str(0), "30");

    let out = temp_out("export_xlsx_writes", "xlsx");
    vl().args([
        "--db", &db_path, "export", "--data", "cardio", "--format", "xlsx", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("XLSX export completed"));

    assert!(std::path::Path::new(&out).exists());
}

#[test]
fn test_export_empty_range_warns() {
    let db_path = setup_test_db("export_empty_range");
    init_db(&db_path);

    seed_cardio(&db_path, &day_str(0), "30");

    let out = temp_out("export_empty_range", "csv");
    vl().args([
        "--db", &db_path, "export", "--data", "cardio", "--format", "csv", "--file", &out,
        "--range", "2019",
    ])
    .assert()
    .success()
    .stdout(contains("No records found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_relative_path_is_rejected() {
    let db_path = setup_test_db("export_relative_path");
    init_db(&db_path);

    vl().args([
        "--db", &db_path, "export", "--data", "cardio", "--format", "csv", "--file",
        "relative.csv",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_export_range_filters_by_day() {
    let db_path = setup_test_db("export_range_filters");
    init_db(&db_path);

    seed_cardio(&db_path, &day_str(0), "40");
    seed_cardio(&db_path, &day_str(3), "20");

    let out = temp_out("export_range_filters", "csv");
    vl().args([
        "--db",
        &db_path,
        "export",
        "--data",
        "cardio",
        "--format",
        "csv",
        "--file",
        &out,
        "--range",
        &day_str(0),
    ])
    .assert()
    .success();

    let content = std::fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(content.lines().count(), 2); // header + today's row only
}
