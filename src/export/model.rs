use crate::models::entry_log::EntryLog;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Flat row for entry-log export.
#[derive(Serialize, Clone, Debug)]
pub struct EntryLogExport {
    pub id: String,
    pub entry_time: String,
    pub exit_time: String,
    pub worker_id: String,
    pub worker_name: String,
    pub manhole_id: String,
    pub ward: String,
    pub risk: String,
    pub duration_min: i64,
    pub max_duration_min: i64,
    pub overstay: bool,
}

impl EntryLogExport {
    /// Ongoing sessions are measured up to `now` and leave `exit_time` empty.
    pub fn from_log(log: &EntryLog, now: DateTime<Local>) -> Self {
        Self {
            id: log.id.clone(),
            entry_time: log.entry_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            exit_time: log
                .exit_time
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            worker_id: log.worker_id.clone(),
            worker_name: log.worker_name.clone(),
            manhole_id: log.manhole_id.clone(),
            ward: log.ward.clone(),
            risk: log.risk_level.as_str().to_string(),
            duration_min: log.duration_minutes(now),
            max_duration_min: log.max_duration,
            overstay: log.is_overstay(now),
        }
    }
}

/// Header for XLSX / PDF (CSV and JSON take field names from serde).
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "entry_time",
        "exit_time",
        "worker_id",
        "worker_name",
        "manhole_id",
        "ward",
        "risk",
        "duration_min",
        "max_duration_min",
        "overstay",
    ]
}

pub(crate) fn log_to_row(e: &EntryLogExport) -> Vec<String> {
    vec![
        e.id.clone(),
        e.entry_time.clone(),
        e.exit_time.clone(),
        e.worker_id.clone(),
        e.worker_name.clone(),
        e.manhole_id.clone(),
        e.ward.clone(),
        e.risk.clone(),
        e.duration_min.to_string(),
        e.max_duration_min.to_string(),
        if e.overstay { "yes" } else { "no" }.to_string(),
    ]
}

pub(crate) fn logs_to_table(logs: &[EntryLogExport]) -> Vec<Vec<String>> {
    logs.iter().map(log_to_row).collect()
}
