use chrono::{DateTime, Duration, Local, TimeZone};
use safeentry::config::Config;
use safeentry::core::dashboard::{build_view, compute_stats};
use safeentry::core::generator::{Dataset, Generator, WARDS};
use safeentry::core::heatmap::{count_by_risk, count_by_ward, filter_by_risk};
use safeentry::core::logs::LogFilter;
use safeentry::models::entry_log::EntryLog;
use safeentry::models::risk_level::RiskLevel;

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

fn log(id: &str, worker: &str, ward: &str, minutes: i64, seconds: i64) -> EntryLog {
    let entry_time = anchor() - Duration::hours(2);
    EntryLog {
        id: id.to_string(),
        worker_id: "WKR-001".to_string(),
        worker_name: worker.to_string(),
        manhole_id: "MH-SOL-0003".to_string(),
        manhole_name: format!("Manhole 3 - {ward}"),
        entry_time,
        exit_time: Some(entry_time + Duration::minutes(minutes) + Duration::seconds(seconds)),
        max_duration: 45,
        risk_level: RiskLevel::Safe,
        ward: ward.to_string(),
    }
}

#[test]
fn test_log_filter_overstay_and_search() {
    let logs = vec![
        log("LOG-0001", "Ramesh Jadhav", "Ward A", 30, 0),
        log("LOG-0002", "Sunil Patil", "Ward B", 45, 0),
        log("LOG-0003", "Ramesh Jadhav", "Ward B", 45, 30),
        log("LOG-0004", "Mahesh Kamble", "Ward C", 60, 0),
    ];
    let now = anchor();

    let ids = |filter: &LogFilter| -> Vec<String> {
        filter.apply(&logs, now).iter().map(|l| l.id.clone()).collect()
    };

    let overstay = LogFilter {
        search: None,
        overstay_only: true,
    };
    assert_eq!(ids(&overstay), vec!["LOG-0003", "LOG-0004"]);

    let search = LogFilter {
        search: Some("  ramesh ".to_string()),
        overstay_only: false,
    };
    assert_eq!(ids(&search), vec!["LOG-0001", "LOG-0003"]);

    let both = LogFilter {
        search: Some("ward b".to_string()),
        overstay_only: true,
    };
    assert_eq!(ids(&both), vec!["LOG-0003"]);

    assert_eq!(ids(&LogFilter::default()).len(), 4);
}

#[test]
fn test_dashboard_stats_match_dataset() {
    let ds = generate(42);
    let now = anchor() + Duration::minutes(20);
    let stats = compute_stats(&ds, now);

    assert_eq!(stats.active_workers, 5);
    assert_eq!(stats.total_manholes, 120);
    assert_eq!(
        stats.high_risk_zones,
        ds.manholes
            .iter()
            .filter(|m| m.risk_level == RiskLevel::Danger)
            .count()
    );
    assert_eq!(stats.alerts_triggered, ds.alerts.len());
    // only the historical alert starts resolved
    assert!(stats.resolved_alerts <= 1);
    assert_eq!(
        stats.resolved_alerts,
        ds.alerts.iter().filter(|a| a.resolved).count()
    );
    assert_eq!(
        stats.entries_today,
        ds.entry_logs
            .iter()
            .filter(|l| l.entry_time.date_naive() == now.date_naive())
            .count()
    );

    let expected_overstays = ds
        .active_entries
        .iter()
        .filter(|e| (now - e.entry_time) > Duration::minutes(45))
        .count();
    assert_eq!(stats.overstays_now, expected_overstays);
}

#[test]
fn test_dashboard_ward_filter() {
    let ds = generate(42);
    let now = anchor();

    let all = build_view(&ds, None, now);
    assert_eq!(all.entries.len(), ds.active_entries.len());
    assert_eq!(all.alerts.len(), ds.alerts.len());

    let mut entries_seen = 0;
    let mut alerts_seen = 0;
    for ward in WARDS {
        let view = build_view(&ds, Some(&ward.to_lowercase()), now);
        assert!(view.entries.iter().all(|e| e.ward == ward));
        assert!(view.alerts.iter().all(|a| a.ward == ward));
        // stats stay network-wide
        assert_eq!(view.stats, all.stats);
        entries_seen += view.entries.len();
        alerts_seen += view.alerts.len();
    }
    assert_eq!(entries_seen, ds.active_entries.len());
    assert_eq!(alerts_seen, ds.alerts.len());
}

#[test]
fn test_heatmap_counts_cover_network() {
    let ds = generate(42);

    let counts = count_by_risk(&ds.manholes);
    assert_eq!(counts.total(), 120);

    for level in RiskLevel::ALL {
        let selected = filter_by_risk(&ds, Some(level));
        assert_eq!(selected.len(), counts.get(level));
        assert!(selected.iter().all(|m| m.risk_level == level));
    }
    assert_eq!(filter_by_risk(&ds, None).len(), 120);

    let by_ward = count_by_ward(&ds);
    assert_eq!(by_ward.len(), WARDS.len());
    assert_eq!(by_ward.values().map(|c| c.total()).sum::<usize>(), 120);
    assert_eq!(
        by_ward.values().map(|c| c.danger).sum::<usize>(),
        counts.danger
    );
    // 120 manholes spread round-robin over six wards
    assert!(by_ward.values().all(|c| c.total() == 20));
}
