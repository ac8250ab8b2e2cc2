use chrono::{DateTime, Local, TimeZone};
use safeentry::config::Config;
use safeentry::core::generator::{Dataset, Generator, WARDS, canonical_ward};
use safeentry::models::alert::AlertKind;
use std::collections::HashSet;

fn anchor() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .expect("valid local time")
}

fn generate(seed: u64) -> Dataset {
    let cfg = Config::default();
    Generator::new(seed, anchor(), &cfg.generator, &cfg.risk, &cfg.supervisor_id).generate()
}

#[test]
fn test_same_seed_same_dataset() {
    let a = serde_json::to_string(&generate(42)).expect("serialize");
    let b = serde_json::to_string(&generate(42)).expect("serialize");
    let c = serde_json::to_string(&generate(43)).expect("serialize");
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_collection_sizes_and_ids() {
    let ds = generate(42);

    assert_eq!(ds.manholes.len(), 120);
    assert_eq!(ds.workers.len(), 12);
    assert_eq!(ds.active_entries.len(), 5);
    assert_eq!(ds.entry_logs.len(), 35);

    assert_eq!(ds.manholes[0].id, "MH-SOL-0001");
    assert_eq!(ds.manholes[119].id, "MH-SOL-0120");
    assert_eq!(ds.workers[0].id, "WKR-001");

    let ids: HashSet<_> = ds.manholes.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids.len(), ds.manholes.len());
    let alert_ids: HashSet<_> = ds.alerts.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(alert_ids.len(), ds.alerts.len());
}

#[test]
fn test_manhole_fields_within_ranges() {
    let cfg = Config::default();
    let ds = generate(7);

    for m in &ds.manholes {
        assert_eq!(m.risk_level, cfg.risk.classify(&m.counters), "{}", m.id);
        assert!(m.counters.incident_count < 8);
        assert!((0.0..=5.0).contains(&m.counters.rainfall_index));
        assert!(m.counters.blockage_frequency < 6);
        assert!(m.counters.overstay_count < 4);
        assert!((2.0..=8.0).contains(&m.depth));
        assert!((m.lat - cfg.generator.center_lat).abs() <= 0.04 + 1e-9);
        assert!((m.lng - cfg.generator.center_lng).abs() <= 0.05 + 1e-9);
        assert!(WARDS.contains(&m.ward.as_str()));
        assert!((2..6).contains(&m.cleaning_history.len()));
        assert_eq!(m.incidents.len(), m.counters.incident_count as usize);
        assert!(m.last_cleaned < anchor().date_naive());
    }
}

#[test]
fn test_workers_point_back_to_their_entry() {
    let ds = generate(42);

    for e in &ds.active_entries {
        let worker = ds.worker(&e.worker_id).expect("worker exists");
        assert_eq!(worker.active_entry.as_deref(), Some(e.manhole_id.as_str()));
        let manhole = ds.manhole(&e.manhole_id).expect("manhole exists");
        assert_eq!(manhole.risk_level, e.risk_level);
        assert_eq!(manhole.ward, e.ward);
    }

    let inside = ds.workers.iter().filter(|w| w.is_inside()).count();
    assert_eq!(inside, ds.active_entries.len());
}

#[test]
fn test_overstay_alert_iff_entry_overstayed() {
    for seed in 0..20 {
        let ds = generate(seed);
        for e in &ds.active_entries {
            let has_alert = ds
                .alerts
                .iter()
                .any(|a| a.kind == AlertKind::Overstay && a.worker_id == e.worker_id);
            assert_eq!(has_alert, e.is_overstay(ds.anchor), "seed {seed}");
        }
    }
}

#[test]
fn test_entry_logs_overstay_matches_duration() {
    let ds = generate(42);
    let now = ds.anchor;

    let ongoing: Vec<_> = ds.entry_logs.iter().filter(|l| l.is_ongoing()).collect();
    assert_eq!(ongoing.len(), ds.active_entries.len());

    for l in &ds.entry_logs {
        let end = l.exit_time.unwrap_or(now);
        let seconds = (end - l.entry_time).num_seconds();
        assert!(seconds > 0, "{}", l.id);
        assert_eq!(l.is_overstay(now), seconds > l.max_duration * 60, "{}", l.id);
    }
}

#[test]
fn test_oversized_max_duration_does_not_panic() {
    let mut cfg = Config::default();
    cfg.generator.max_duration_minutes = i64::MAX / 2;

    let ds = Generator::new(1, anchor(), &cfg.generator, &cfg.risk, &cfg.supervisor_id).generate();
    assert!(ds.active_entries.iter().all(|e| !e.is_overstay(ds.anchor)));
    assert!(ds.alerts.iter().all(|a| a.kind != AlertKind::Overstay));
}

#[test]
fn test_canonical_ward_is_case_insensitive() {
    assert_eq!(canonical_ward("ward a"), Some("Ward A"));
    assert_eq!(canonical_ward(" WARD F "), Some("Ward F"));
    assert_eq!(canonical_ward("Ward Z"), None);
}
