use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, setup_test_db, sfe, temp_out};

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    init_db(&db_path, 42);

    let out = temp_out("export_csv_all", "csv");

    sfe()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    let header = lines.next().expect("header row");
    assert!(header.starts_with("id,entry_time,exit_time,worker_id"));
    assert_eq!(lines.count(), 35);
    assert!(content.contains("LOG-0001"));
    assert!(content.contains("MH-SOL-"));
}

#[test]
fn test_export_json_search() {
    let db_path = setup_test_db("export_json_search");
    init_db(&db_path, 42);

    let out = temp_out("export_json_search", "json");

    sfe()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--search",
            "Ramesh",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of rows");
    assert!(!rows.is_empty());
    for row in rows {
        assert_eq!(row["worker_name"], "Ramesh Jadhav");
    }
}

#[test]
fn test_export_xlsx_and_pdf() {
    let db_path = setup_test_db("export_xlsx_pdf");
    init_db(&db_path, 42);

    for ext in ["xlsx", "pdf"] {
        let out = temp_out(&format!("export_{ext}"), ext);
        sfe()
            .args(["--db", &db_path, "export", "--format", ext, "--file", &out])
            .assert()
            .success();
        let meta = fs::metadata(&out).expect("exported file exists");
        assert!(meta.len() > 0);
    }
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db(&db_path, 42);

    sfe()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_invalid_range() {
    let db_path = setup_test_db("export_bad_range");
    init_db(&db_path, 42);

    let out = temp_out("export_bad_range", "csv");

    sfe()
        .args([
            "--db", &db_path, "export", "--file", &out, "--range", "2025-13",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_backup_copies_state_file() {
    let db_path = setup_test_db("backup_copy");
    init_db(&db_path, 42);

    let out = temp_out("backup_copy", "sqlite");

    sfe()
        .args(["--db", &db_path, "backup", "--file", &out, "--force"])
        .assert()
        .success();

    assert!(fs::metadata(&out).expect("backup exists").len() > 0);
}

#[test]
fn test_export_json_overstay_only() {
    let db_path = setup_test_db("export_json_overstay");
    init_db(&db_path, 42);

    let out = temp_out("export_json_overstay", "json");

    sfe()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--overstay",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    for row in rows.as_array().expect("array of rows") {
        assert_eq!(row["overstay"], true);
        let duration = row["duration_min"].as_i64().expect("duration");
        let max = row["max_duration_min"].as_i64().expect("max");
        assert!(duration >= max);
    }
}

#[test]
fn test_backup_compress_keeps_existing_archive() {
    let db_path = setup_test_db("backup_compress_twice");
    init_db(&db_path, 42);

    let out = temp_out("backup_compress_twice", "sqlite");
    let archive = safeentry::core::backup::archive_path(std::path::Path::new(&out));
    fs::remove_file(&archive).ok();

    sfe()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success();
    assert!(archive.exists());
    assert!(!std::path::Path::new(&out).exists());
    let first_len = fs::metadata(&archive).expect("archive exists").len();

    // no --force and no answer on stdin: the archive must not be replaced
    sfe()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));
    assert_eq!(fs::metadata(&archive).expect("archive kept").len(), first_len);
    assert!(!std::path::Path::new(&out).exists());

    sfe()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress", "--force"])
        .assert()
        .success();
}
