#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::Local;
use safeentry::config::Config;
use safeentry::core::generator::Generator;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sfe() -> Command {
    cargo_bin_cmd!("safeentry")
}

/// Create a unique test state file path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_safeentry.sqlite", name));
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

/// Initialize the state file with a fixed seed
pub fn init_db(db_path: &str, seed: u64) {
    sfe()
        .args(["--db", db_path, "--test", "init", "--seed", &seed.to_string()])
        .assert()
        .success();
}

/// Default configuration pointing at a test state file
pub fn test_config(db_path: &str) -> Config {
    Config {
        database: db_path.to_string(),
        ..Config::default()
    }
}

/// First seed whose dataset has at least one open alert
pub fn seed_with_open_alert() -> u64 {
    let cfg = Config::default();
    (1..200)
        .find(|seed| {
            Generator::new(
                *seed,
                Local::now(),
                &cfg.generator,
                &cfg.risk,
                &cfg.supervisor_id,
            )
            .generate()
            .alerts
            .iter()
            .any(|a| !a.resolved)
        })
        .expect("some seed yields an open alert")
}
