use chrono::{Duration, Local, TimeZone};
use safeentry::core::countdown::{Countdown, Phase};
use safeentry::models::entry::ActiveEntry;
use safeentry::models::entry_log::EntryLog;
use safeentry::models::risk_level::RiskLevel;

fn entry_time() -> chrono::DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 6, 1, 10, 0, 0)
        .single()
        .expect("valid local time")
}

#[test]
fn test_countdown_runs_down_normally() {
    let t0 = entry_time();
    let cd = Countdown::new(t0, 45, 0.8);

    let state = cd.at(t0 + Duration::minutes(10));
    assert_eq!(state.phase, Phase::Normal);
    assert_eq!(state.remaining_ms, 35 * 60_000);
    assert_eq!(state.compact(), "35:00");
    assert_eq!(state.full(), "35:00");
}

#[test]
fn test_warning_after_eighty_percent() {
    let t0 = entry_time();
    let cd = Countdown::new(t0, 45, 0.8);

    // 36 min is exactly 80%: still normal
    assert_eq!(cd.at(t0 + Duration::minutes(36)).phase, Phase::Normal);
    assert_eq!(
        cd.at(t0 + Duration::minutes(36) + Duration::seconds(1)).phase,
        Phase::Warning
    );
    assert_eq!(cd.at(t0 + Duration::minutes(44)).compact(), "01:00");
}

#[test]
fn test_sign_flips_at_max_duration() {
    let t0 = entry_time();
    let cd = Countdown::new(t0, 45, 0.8);

    let before = cd.at(t0 + Duration::minutes(45) - Duration::seconds(1));
    assert!(!before.is_overstay());
    assert_eq!(before.compact(), "00:01");

    // remaining time is zero, not yet negative
    let at_max = cd.at(t0 + Duration::minutes(45));
    assert!(!at_max.is_overstay());
    assert_eq!(at_max.remaining_ms, 0);
    assert_eq!(at_max.compact(), "00:00");

    let just_after = cd.at(t0 + Duration::minutes(45) + Duration::milliseconds(1));
    assert!(just_after.is_overstay());
    assert_eq!(just_after.phase, Phase::Overstay);

    let after = cd.at(t0 + Duration::minutes(47) + Duration::seconds(5));
    assert_eq!(after.compact(), "-02:05");
    assert_eq!(after.full(), "OVERSTAY -02:05");
    assert_eq!(after.remaining_ms, -(2 * 60_000 + 5_000));
}

#[test]
fn test_progress_bar_is_capped() {
    let t0 = entry_time();
    let cd = Countdown::new(t0, 40, 0.8);

    assert_eq!(cd.at(t0).bar(10), format!("[{}]", "░".repeat(10)));
    assert_eq!(
        cd.at(t0 + Duration::minutes(20)).bar(10),
        format!("[{}{}]", "█".repeat(5), "░".repeat(5))
    );
    let over = cd.at(t0 + Duration::minutes(90));
    assert_eq!(over.progress, 1.0);
    assert_eq!(over.bar(10), format!("[{}]", "█".repeat(10)));
}

fn active_entry(t0: chrono::DateTime<Local>) -> ActiveEntry {
    ActiveEntry {
        manhole_id: "MH-SOL-0001".to_string(),
        manhole_name: "Manhole 1 - Ward B".to_string(),
        worker_id: "WKR-001".to_string(),
        worker_name: "Ramesh Jadhav".to_string(),
        supervisor_id: "SUP-001".to_string(),
        entry_time: t0,
        max_duration: 45,
        ward: "Ward B".to_string(),
        risk_level: RiskLevel::Caution,
    }
}

fn ongoing_log(t0: chrono::DateTime<Local>) -> EntryLog {
    EntryLog {
        id: "LOG-0001".to_string(),
        worker_id: "WKR-001".to_string(),
        worker_name: "Ramesh Jadhav".to_string(),
        manhole_id: "MH-SOL-0001".to_string(),
        manhole_name: "Manhole 1 - Ward B".to_string(),
        entry_time: t0,
        exit_time: None,
        max_duration: 45,
        risk_level: RiskLevel::Caution,
        ward: "Ward B".to_string(),
    }
}

#[test]
fn test_countdown_entry_and_log_agree_on_overstay() {
    let t0 = entry_time();
    let entry = active_entry(t0);
    let log = ongoing_log(t0);

    let cases = [
        (Duration::minutes(44) + Duration::seconds(59), false),
        (Duration::minutes(45), false),
        (Duration::minutes(45) + Duration::seconds(30), true),
        (Duration::minutes(46), true),
    ];

    for (elapsed, expected) in cases {
        let now = t0 + elapsed;
        let countdown = Countdown::for_entry(&entry, 0.8).at(now);
        assert_eq!(countdown.is_overstay(), expected, "countdown at {elapsed}");
        assert_eq!(entry.is_overstay(now), expected, "entry at {elapsed}");
        assert_eq!(log.is_overstay(now), expected, "log at {elapsed}");
    }

    // minutes are truncated for display, the flag is not
    let now = t0 + Duration::minutes(45) + Duration::seconds(30);
    assert_eq!(log.duration_minutes(now), 45);
    assert!(log.is_overstay(now));
    assert_eq!(Countdown::for_entry(&entry, 0.8).at(now).full(), "OVERSTAY -00:30");
}

#[test]
fn test_completed_log_overstay_uses_exact_duration() {
    let t0 = entry_time();
    let mut log = ongoing_log(t0);

    log.exit_time = Some(t0 + Duration::minutes(45));
    assert!(!log.is_overstay(t0));

    log.exit_time = Some(t0 + Duration::minutes(45) + Duration::seconds(1));
    assert!(log.is_overstay(t0));
    assert_eq!(log.duration_minutes(t0), 45);
}

#[test]
fn test_oversized_maximum_does_not_overflow() {
    let t0 = entry_time();
    let state = Countdown::new(t0, i64::MAX / 2, 0.8).at(t0 + Duration::minutes(10));
    assert!(!state.is_overstay());
    assert!(state.remaining_ms > 0);
}
