mod common;
use common::{gc, init_db_with_data, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;

const TODAY: &str = "2024-06-30";

#[test]
fn test_export_intervals_csv_all() {
    let db_path = setup_test_db("export_intervals_csv_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_intervals_csv_all", "csv");

    gc().args([
        "--db", &db_path, "--today", TODAY, "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,employer,start_date,end_date,is_current,days,gap_after_days")
    );
    assert_eq!(
        lines.next(),
        Some("1,Acme Ltd,2020-01-01,2020-06-30,false,182,62")
    );
    assert!(content.contains("Initech,2021-04-02,current,true"));
}

#[test]
fn test_export_gaps_csv() {
    let db_path = setup_test_db("export_gaps_csv");
    init_db_with_data(&db_path);

    gc().args([
        "--db", &db_path, "--today", TODAY, "explain", "--gap", "1", "--reason", "Travelling",
    ])
    .assert()
    .success();

    let out = temp_out("export_gaps_csv", "csv");

    gc().args([
        "--db", &db_path, "--today", TODAY, "export", "--format", "csv", "--file", &out, "--gaps",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("1,2020-07-01,2020-08-31,62,Acme Ltd,Globex,explained,Travelling"));
    assert!(content.contains("2,2021-01-02,2021-04-01,90,Globex,Initech,UNEXPLAINED,"));
}

#[test]
fn test_export_gaps_json_range_keeps_numbering() {
    let db_path = setup_test_db("export_gaps_json_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_gaps_json_range", "json");

    gc().args([
        "--db", &db_path, "--today", TODAY, "export", "--format", "json", "--file", &out,
        "--gaps", "--range", "2021",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["gap"], 2);
    assert_eq!(rows[0]["start_date"], "2021-01-02");
    assert_eq!(rows[0]["days"], 90);
}

#[test]
fn test_export_intervals_range_month() {
    let db_path = setup_test_db("export_intervals_range_month");
    init_db_with_data(&db_path);

    let out = temp_out("export_intervals_range_month", "json");

    gc().args([
        "--db", &db_path, "--today", TODAY, "export", "--format", "json", "--file", &out,
        "--range", "2020-08",
    ])
    .assert()
    .success()
    .stdout(contains("No employment intervals found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_xlsx() {
    let db_path = setup_test_db("export_xlsx");
    init_db_with_data(&db_path);

    let out = temp_out("export_xlsx", "xlsx");

    gc().args([
        "--db", &db_path, "--today", TODAY, "export", "--format", "xlsx", "--file", &out,
    ])
    .assert()
    .success();

    let bytes = fs::read(&out).expect("read xlsx");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_pdf_gaps() {
    let db_path = setup_test_db("export_pdf_gaps");
    init_db_with_data(&db_path);

    let out = temp_out("export_pdf_gaps", "pdf");

    gc().args([
        "--db", &db_path, "--today", TODAY, "export", "--format", "pdf", "--file", &out, "--gaps",
    ])
    .assert()
    .success()
    .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative_path");
    init_db_with_data(&db_path);

    gc().args([
        "--db", &db_path, "export", "--format", "csv", "--file", "relative.csv",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_export_existing_file_without_force() {
    let db_path = setup_test_db("export_existing_file");
    init_db_with_data(&db_path);

    let out = temp_out("export_existing_file", "csv");
    fs::write(&out, "keep me").expect("seed file");

    gc().args([
        "--db", &db_path, "--today", TODAY, "export", "--format", "csv", "--file", &out,
    ])
    .write_stdin("n\n")
    .assert()
    .failure()
    .stderr(contains("export cancelled"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    gc().args([
        "--db", &db_path, "--today", TODAY, "export", "--format", "csv", "--file", &out,
        "--force",
    ])
    .assert()
    .success();

    assert!(fs::read_to_string(&out).unwrap().contains("Acme Ltd"));
}
