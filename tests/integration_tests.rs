use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_interval, gc, init_db_with_data, setup_test_db, temp_out};

const TODAY: &str = "2024-06-30";

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    gc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_reports_new_gap() {
    let db_path = setup_test_db("add_reports_new_gap");

    gc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    add_interval(&db_path, "Acme Ltd", "2020-01-01", Some("2020-06-30"));

    gc().args([
        "--db",
        &db_path,
        "--today",
        TODAY,
        "add",
        "Globex",
        "--start",
        "2020-09-01",
        "--end",
        "2021-01-01",
    ])
    .assert()
    .success()
    .stdout(contains("Added interval #2"))
    .stdout(contains("Gap #1: 2020-07-01 → 2020-08-31"))
    .stdout(contains("between Acme Ltd and Globex needs an explanation"));
}

#[test]
fn test_add_rejects_end_before_start() {
    let db_path = setup_test_db("add_rejects_end_before_start");

    gc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    gc().args([
        "--db",
        &db_path,
        "add",
        "Acme Ltd",
        "--start",
        "2020-06-30",
        "--end",
        "2020-01-01",
    ])
    .assert()
    .failure()
    .stderr(contains("is before start date"));
}

#[test]
fn test_add_rejects_bad_date() {
    let db_path = setup_test_db("add_rejects_bad_date");

    gc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    gc().args(["--db", &db_path, "add", "Acme Ltd", "--start", "2020-13-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format: 2020-13-01"));
}

#[test]
fn test_gaps_lists_all_gaps() {
    let db_path = setup_test_db("gaps_lists_all_gaps");
    init_db_with_data(&db_path);

    gc().args(["--db", &db_path, "--today", TODAY, "gaps"])
        .assert()
        .success()
        .stdout(contains("2020-07-01"))
        .stdout(contains("2020-08-31"))
        .stdout(contains("2021-01-02"))
        .stdout(contains("2021-04-01"))
        .stdout(contains("UNEXPLAINED"))
        .stdout(contains("2 gap(s), 2 unexplained"));
}

#[test]
fn test_gaps_threshold_filters_short_gaps() {
    let db_path = setup_test_db("gaps_threshold_filters");
    init_db_with_data(&db_path);

    gc().args(["--db", &db_path, "--today", TODAY, "gaps", "--threshold", "90"])
        .assert()
        .success()
        .stdout(contains("2021-01-02"))
        .stdout(contains("1 gap(s), 1 unexplained"))
        .stdout(contains("2020-07-01").not());

    gc().args(["--db", &db_path, "--today", TODAY, "gaps", "--threshold", "91"])
        .assert()
        .success()
        .stdout(contains("No employment gaps found."));

    gc().args(["--db", &db_path, "--today", TODAY, "gaps", "--regulatory"])
        .assert()
        .success()
        .stdout(contains("2 gap(s)"));
}

#[test]
fn test_gaps_are_independent_of_insert_order() {
    let db_path = setup_test_db("gaps_insert_order");

    gc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    add_interval(&db_path, "Globex", "2020-09-01", Some("2021-01-01"));
    add_interval(&db_path, "Acme Ltd", "2020-01-01", Some("2020-06-30"));

    gc().args(["--db", &db_path, "--today", TODAY, "gaps"])
        .assert()
        .success()
        .stdout(contains("2020-07-01"))
        .stdout(contains("1 gap(s), 1 unexplained"));
}

#[test]
fn test_single_current_interval_has_no_gaps() {
    let db_path = setup_test_db("single_current_interval");

    gc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    add_interval(&db_path, "Initech", "2015-03-01", None);

    gc().args(["--db", &db_path, "--today", TODAY, "gaps"])
        .assert()
        .success()
        .stdout(contains("No employment gaps found."));
}

#[test]
fn test_explain_marks_gap_explained() {
    let db_path = setup_test_db("explain_marks_gap");
    init_db_with_data(&db_path);

    gc().args([
        "--db",
        &db_path,
        "--today",
        TODAY,
        "explain",
        "--gap",
        "1",
        "--reason",
        "Travelling",
    ])
    .assert()
    .success()
    .stdout(contains("Gap #1 (2020-07-01 → 2020-08-31, 62 days) explained."));

    gc().args(["--db", &db_path, "--today", TODAY, "gaps"])
        .assert()
        .success()
        .stdout(contains("2 gap(s), 1 unexplained"))
        .stdout(contains("#1 reason: Travelling"));

    gc().args(["--db", &db_path, "--today", TODAY, "gaps", "--unexplained"])
        .assert()
        .success()
        .stdout(contains("2021-01-02"))
        .stdout(contains("Travelling").not());
}

#[test]
fn test_explain_unknown_gap_fails() {
    let db_path = setup_test_db("explain_unknown_gap");
    init_db_with_data(&db_path);

    gc().args([
        "--db", &db_path, "--today", TODAY, "explain", "--gap", "9", "--reason", "x",
    ])
    .assert()
    .failure()
    .stderr(contains("No gap #9"));
}

#[test]
fn test_explanation_survives_unrelated_edit() {
    let db_path = setup_test_db("explanation_survives_edit");
    init_db_with_data(&db_path);

    gc().args([
        "--db", &db_path, "--today", TODAY, "explain", "--gap", "1", "--reason", "Travelling",
    ])
    .assert()
    .success();

    // moves the second gap, the first one is untouched
    gc().args([
        "--db", &db_path, "--today", TODAY, "add", "--edit", "--id", "3", "--start", "2021-03-01",
    ])
    .assert()
    .success()
    .stdout(contains("Interval #3 updated"));

    gc().args(["--db", &db_path, "--today", TODAY, "gaps"])
        .assert()
        .success()
        .stdout(contains("2021-02-28"))
        .stdout(contains("2 gap(s), 1 unexplained"))
        .stdout(contains("no longer match").not());
}

#[test]
fn test_editing_following_interval_asks_reconfirmation() {
    let db_path = setup_test_db("edit_following_interval");
    init_db_with_data(&db_path);

    gc().args([
        "--db", &db_path, "--today", TODAY, "explain", "--gap", "1", "--reason", "Travelling",
    ])
    .assert()
    .success();

    gc().args([
        "--db", &db_path, "--today", TODAY, "add", "--edit", "--id", "2", "--start", "2020-09-15",
    ])
    .assert()
    .success()
    .stdout(contains("please confirm its explanation"));

    gc().args(["--db", &db_path, "--today", TODAY, "gaps"])
        .assert()
        .success()
        .stdout(contains("2020-09-14"))
        .stdout(contains("explained (range changed)"));
}

#[test]
fn test_delete_interval_orphans_explanation_and_prune() {
    let db_path = setup_test_db("delete_orphans_explanation");
    init_db_with_data(&db_path);

    gc().args([
        "--db", &db_path, "--today", TODAY, "explain", "--gap", "1", "--reason", "Travelling",
    ])
    .assert()
    .success();

    gc().args(["--db", &db_path, "--today", TODAY, "del", "--id", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Deleted interval #1 (Acme Ltd)"));

    gc().args(["--db", &db_path, "--today", TODAY, "gaps"])
        .assert()
        .success()
        .stdout(contains("1 gap(s), 1 unexplained"))
        .stdout(contains("no longer match a gap"))
        .stdout(contains("Travelling"));

    gc().args(["--db", &db_path, "--today", TODAY, "explain", "--prune"])
        .assert()
        .success()
        .stdout(contains("Removed 1 orphaned explanation(s)."));

    gc().args(["--db", &db_path, "--today", TODAY, "gaps"])
        .assert()
        .success()
        .stdout(contains("no longer match").not());
}

#[test]
fn test_delete_cancelled_keeps_interval() {
    let db_path = setup_test_db("delete_cancelled");
    init_db_with_data(&db_path);

    gc().args(["--db", &db_path, "del", "--id", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    gc().args(["--db", &db_path, "--today", TODAY, "list"])
        .assert()
        .success()
        .stdout(contains("Acme Ltd"));
}

#[test]
fn test_delete_unknown_interval_fails() {
    let db_path = setup_test_db("delete_unknown_interval");
    init_db_with_data(&db_path);

    gc().args(["--db", &db_path, "del", "--id", "99"])
        .assert()
        .failure()
        .stderr(contains("No employment interval with id 99"));
}

#[test]
fn test_explain_delete() {
    let db_path = setup_test_db("explain_delete");
    init_db_with_data(&db_path);

    gc().args([
        "--db", &db_path, "--today", TODAY, "explain", "--gap", "2", "--reason", "Studying",
    ])
    .assert()
    .success();

    gc().args(["--db", &db_path, "explain", "--del", "--id", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Explanation #1 deleted."));

    gc().args(["--db", &db_path, "--today", TODAY, "gaps"])
        .assert()
        .success()
        .stdout(contains("2 gap(s), 2 unexplained"));
}

#[test]
fn test_list_shows_history_with_gaps() {
    let db_path = setup_test_db("list_history");
    init_db_with_data(&db_path);

    gc().args(["--db", &db_path, "--today", TODAY, "list"])
        .assert()
        .success()
        .stdout(contains("Acme Ltd"))
        .stdout(contains("Globex"))
        .stdout(contains("Initech"))
        .stdout(contains("current"))
        .stdout(contains("3 interval(s), 2 gap(s), 2 unexplained."));
}

#[test]
fn test_list_places_gap_after_nested_interval() {
    let db_path = setup_test_db("list_nested_gap");
    gc().args(["--db", &db_path, "--test", "init"]).assert().success();

    add_interval(&db_path, "Longhaul", "2019-01-01", Some("2020-06-30"));
    add_interval(&db_path, "Sidegig", "2019-03-01", Some("2019-09-30"));
    add_interval(&db_path, "Umbrella", "2020-09-01", Some("2021-01-01"));

    let output = gc()
        .args(["--db", &db_path, "--today", TODAY, "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let nested = stdout.find("Sidegig").unwrap();
    let gap = stdout.find("gap #1").unwrap();
    let next = stdout.find("Umbrella").unwrap();
    assert!(nested < gap && gap < next);
}

#[test]
fn test_references_mark_bounding_employers() {
    let db_path = setup_test_db("references_plan");
    init_db_with_data(&db_path);

    gc().args(["--db", &db_path, "--today", TODAY, "references"])
        .assert()
        .success()
        .stdout(contains("before gap"))
        .stdout(contains("after gap"))
        .stdout(contains("most recent employer"))
        .stdout(contains("3 reference request(s) needed; 2 gap(s) at this threshold."));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records");
    init_db_with_data(&db_path);

    gc().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_check_info");
    init_db_with_data(&db_path);

    gc().args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed."));
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_compressed");
    init_db_with_data(&db_path);

    let out = temp_out("backup_compressed", "sqlite");
    let zip = out.replace(".sqlite", ".zip");
    std::fs::remove_file(&zip).ok();

    gc().args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed backup created"));

    assert!(std::path::Path::new(&zip).exists());
}
