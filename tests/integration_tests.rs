use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use chrono::DateTime;
use safeentry::core::dataset;
use safeentry::db::pool::DbPool;
use safeentry::db::queries::{insert_resolution, resolved_alert_ids};

mod common;
use common::{init_db, seed_with_open_alert, setup_test_db, sfe, test_config};

#[test]
fn test_commands_require_init() {
    let db_path = setup_test_db("requires_init");

    sfe()
        .args(["--db", &db_path, "dashboard"])
        .assert()
        .failure()
        .stderr(contains("not initialized"));
}

#[test]
fn test_init_and_dashboard() {
    let db_path = setup_test_db("init_dashboard");
    init_db(&db_path, 42);

    sfe()
        .args(["--db", &db_path, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Active Operations"))
        .stdout(contains("Active workers"))
        .stdout(contains("High-risk zones"))
        .stdout(contains("Alerts"));
}

#[test]
fn test_reinit_keeps_anchor_without_seed() {
    let db_path = setup_test_db("reinit_keeps_anchor");
    init_db(&db_path, 42);

    sfe()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Keeping existing dataset (seed 42"));
}

#[test]
fn test_dashboard_rejects_unknown_ward() {
    let db_path = setup_test_db("dashboard_bad_ward");
    init_db(&db_path, 42);

    sfe()
        .args(["--db", &db_path, "dashboard", "--ward", "Ward Z"])
        .assert()
        .failure()
        .stderr(contains("Unknown ward"));
}

#[test]
fn test_manhole_profile() {
    let db_path = setup_test_db("manhole_profile");
    init_db(&db_path, 42);

    sfe()
        .args(["--db", &db_path, "manhole", "mh-sol-0007"])
        .assert()
        .success()
        .stdout(contains("MH-SOL-0007"))
        .stdout(contains("Cleaning history"))
        .stdout(contains("Entry"));
}

#[test]
fn test_manhole_not_found() {
    let db_path = setup_test_db("manhole_not_found");
    init_db(&db_path, 42);

    sfe()
        .args(["--db", &db_path, "manhole", "MH-SOL-9999"])
        .assert()
        .failure()
        .stderr(contains("Manhole not found: MH-SOL-9999"));
}

#[test]
fn test_qr_payload() {
    let db_path = setup_test_db("qr_payload");
    init_db(&db_path, 42);

    sfe()
        .args(["--db", &db_path, "qr", "MH-SOL-0007"])
        .assert()
        .success()
        .stdout(contains("Payload: safeentry://manhole/MH-SOL-0007"));
}

#[test]
fn test_resolve_persists_across_runs() {
    let db_path = setup_test_db("resolve_persists");
    init_db(&db_path, seed_with_open_alert());

    let cfg = test_config(&db_path);
    let before = dataset::load(&cfg).expect("load dataset");
    let alert_id = before
        .dataset
        .alerts
        .iter()
        .find(|a| !a.resolved)
        .map(|a| a.id.clone())
        .expect("open alert");
    drop(before);

    sfe()
        .args(["--db", &db_path, "resolve", &alert_id, "--note", "crew withdrawn"])
        .assert()
        .success()
        .stdout(contains(format!("Alert {alert_id} resolved")));

    let after = dataset::load(&cfg).expect("reload dataset");
    let alert = after.dataset.alert(&alert_id).expect("alert still listed");
    assert!(alert.resolved);

    sfe()
        .args(["--db", &db_path, "resolve", &alert_id])
        .assert()
        .success()
        .stdout(contains("already resolved"));

    sfe()
        .args(["--db", &db_path, "alerts", "--open"])
        .assert()
        .success()
        .stdout(contains(format!("{alert_id} ")).not());

    sfe()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("resolve"));
}

#[test]
fn test_resolve_unknown_alert() {
    let db_path = setup_test_db("resolve_unknown");
    init_db(&db_path, 42);

    sfe()
        .args(["--db", &db_path, "resolve", "ALT-999"])
        .assert()
        .failure()
        .stderr(contains("Alert not found: ALT-999"));
}

#[test]
fn test_logs_search_by_ward() {
    let db_path = setup_test_db("logs_search_ward");
    init_db(&db_path, 42);

    sfe()
        .args(["--db", &db_path, "logs", "--search", "ward c"])
        .assert()
        .success()
        .stdout(contains("Entry logs"))
        .stdout(contains("Ward B").not())
        .stdout(contains("Ward D").not());
}

#[test]
fn test_heatmap_lists_levels() {
    let db_path = setup_test_db("heatmap_levels");
    init_db(&db_path, 42);

    sfe()
        .args(["--db", &db_path, "heatmap", "--wards"])
        .assert()
        .success()
        .stdout(contains("120 manholes"))
        .stdout(contains("Danger"))
        .stdout(contains("Ward F"));
}

#[test]
fn test_watch_single_tick() {
    let db_path = setup_test_db("watch_single_tick");
    init_db(&db_path, 42);

    sfe()
        .args(["--db", &db_path, "watch", "--ticks", "1"])
        .assert()
        .success()
        .stdout(contains("Active operations"));
}

#[test]
fn test_score_command() {
    sfe()
        .args(["score", "5", "2.0", "3", "1"])
        .assert()
        .success()
        .stdout(contains("18.4"))
        .stdout(contains("Danger"))
        .stdout(contains("Entry Prohibited"));

    sfe()
        .args(["score", "6", "2.0", "0", "0"])
        .assert()
        .success()
        .stdout(contains("15.0"))
        .stdout(contains("Caution"));
}

#[test]
fn test_score_rejects_nan_rainfall() {
    sfe()
        .args(["score", "1", "NaN", "1", "1"])
        .assert()
        .failure()
        .stderr(contains("Invalid risk input"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info_check");
    init_db(&db_path, 42);

    sfe()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Seed:"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_heatmap_geojson_markers() {
    let db_path = setup_test_db("heatmap_geojson");
    init_db(&db_path, 42);

    let out = common::temp_out("heatmap_geojson", "geojson");

    sfe()
        .args([
            "--db", &db_path, "heatmap", "--risk", "danger", "--geojson", &out, "--force",
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).expect("read geojson");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(doc["type"], "FeatureCollection");
    for feature in doc["features"].as_array().expect("features") {
        assert_eq!(feature["properties"]["risk"], "danger");
        assert_eq!(feature["properties"]["color"], "#ef4444");
        assert_eq!(feature["geometry"]["coordinates"].as_array().map(Vec::len), Some(2));
    }
}

#[test]
fn test_reinit_with_seed_clears_resolutions() {
    let db_path = setup_test_db("reinit_clears_resolutions");
    init_db(&db_path, seed_with_open_alert());

    let cfg = test_config(&db_path);
    let alert_id = dataset::load(&cfg)
        .expect("load dataset")
        .dataset
        .alerts
        .iter()
        .find(|a| !a.resolved)
        .map(|a| a.id.clone())
        .expect("open alert");

    sfe()
        .args(["--db", &db_path, "resolve", &alert_id])
        .assert()
        .success();

    sfe()
        .args(["--db", &db_path, "--test", "init", "--seed", "99"])
        .assert()
        .success()
        .stdout(contains("1 stored resolution(s) cleared"))
        .stdout(contains("Dataset anchored with seed 99"));

    let pool = DbPool::open(&db_path).expect("open state file");
    assert!(resolved_alert_ids(&pool.conn).expect("read resolutions").is_empty());
}

#[test]
fn test_logs_overstay_only() {
    let db_path = setup_test_db("logs_overstay_only");
    init_db(&db_path, 42);

    // a non-overstay row renders its flag as a green "no"
    sfe()
        .args(["--db", &db_path, "logs", "--overstay"])
        .assert()
        .success()
        .stdout(contains("Entry logs"))
        .stdout(contains("\x1b[32mno\x1b[0m").not());

    sfe()
        .args(["--db", &db_path, "logs"])
        .assert()
        .success()
        .stdout(contains("\x1b[32mno\x1b[0m"));
}

#[test]
fn test_db_check_reports_anchor_and_orphans() {
    let db_path = setup_test_db("db_check_orphans");
    init_db(&db_path, 42);

    sfe()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Dataset anchor present (seed 42"))
        .stdout(contains("0 stored resolution(s), all matching current alerts"));

    {
        let pool = DbPool::open(&db_path).expect("open state file");
        insert_resolution(&pool.conn, "ALT-999", "left over").expect("insert resolution");
    }

    sfe()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("1 of 1 stored resolution(s) match no current alert"))
        .stdout(contains("ALT-999"));
}

#[test]
fn test_log_dates_are_rfc3339() {
    let db_path = setup_test_db("log_dates_rfc3339");
    init_db(&db_path, 42);

    let pool = DbPool::open(&db_path).expect("open state file");
    let mut stmt = pool
        .conn
        .prepare("SELECT operation, date FROM log")
        .expect("prepare");
    let rows: Vec<(String, String)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .expect("query log")
        .collect::<Result<_, _>>()
        .expect("read rows");

    assert!(rows.iter().any(|(op, _)| op == "migration_applied"));
    assert!(rows.iter().any(|(op, _)| op == "init"));
    for (op, date) in &rows {
        assert!(
            DateTime::parse_from_rfc3339(date).is_ok(),
            "{op} row has non-RFC 3339 date {date}"
        );
    }
}
