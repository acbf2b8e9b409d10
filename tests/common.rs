#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gc() -> Command {
    cargo_bin_cmd!("gapcheck")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_gapcheck.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `add` through the CLI with a pinned "today"
pub fn add_interval(db_path: &str, employer: &str, start: &str, end: Option<&str>) {
    let mut args = vec![
        "--db",
        db_path,
        "--today",
        "2024-06-30",
        "add",
        employer,
        "--start",
        start,
    ];
    match end {
        Some(e) => args.extend(["--end", e]),
        None => args.push("--current"),
    }
    gc().args(&args).assert().success();
}

/// Initialize DB and add a small history with one 62-day gap and one
/// 90-day gap:
///
/// - #1 Acme Ltd      2020-01-01 → 2020-06-30
/// - #2 Globex        2020-09-01 → 2021-01-01
/// - #3 Initech       2021-04-02 → current
pub fn init_db_with_data(db_path: &str) {
    gc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    add_interval(db_path, "Acme Ltd", "2020-01-01", Some("2020-06-30"));
    add_interval(db_path, "Globex", "2020-09-01", Some("2021-01-01"));
    add_interval(db_path, "Initech", "2021-04-02", None);
}
