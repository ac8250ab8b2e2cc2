use super::entry::exceeds_max_duration;
use super::risk_level::RiskLevel;
use chrono::{DateTime, Local, TimeDelta};
use serde::Serialize;

/// Historical record of a completed or ongoing session.
#[derive(Debug, Clone, Serialize)]
pub struct EntryLog {
    pub id: String, // LOG-0001
    pub worker_id: String,
    pub worker_name: String,
    pub manhole_id: String,
    pub manhole_name: String,
    pub entry_time: DateTime<Local>,
    pub exit_time: Option<DateTime<Local>>, // None while ongoing
    pub max_duration: i64,                  // minutes
    pub risk_level: RiskLevel,
    pub ward: String,
}

impl EntryLog {
    pub fn is_ongoing(&self) -> bool {
        self.exit_time.is_none()
    }

    /// Ongoing sessions are measured up to `now`.
    pub fn duration(&self, now: DateTime<Local>) -> TimeDelta {
        self.exit_time.unwrap_or(now) - self.entry_time
    }

    /// Whole minutes, for display and export only.
    pub fn duration_minutes(&self, now: DateTime<Local>) -> i64 {
        self.duration(now).num_minutes()
    }

    pub fn is_overstay(&self, now: DateTime<Local>) -> bool {
        exceeds_max_duration(self.duration(now), self.max_duration)
    }

    pub fn entry_time_str(&self) -> String {
        self.entry_time.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn exit_time_str(&self) -> String {
        self.exit_time
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string())
    }

    /// Case-insensitive match on worker name, manhole id or ward.
    pub fn matches(&self, needle: &str) -> bool {
        let n = needle.to_lowercase();
        self.worker_name.to_lowercase().contains(&n)
            || self.manhole_id.to_lowercase().contains(&n)
            || self.ward.to_lowercase().contains(&n)
    }
}
