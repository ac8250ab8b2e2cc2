use super::risk_level::RiskLevel;
use chrono::{DateTime, Local, TimeDelta};
use serde::Serialize;

/// Largest allowed session duration accepted from configuration (one day).
pub const MAX_DURATION_LIMIT_MINUTES: i64 = 24 * 60;

/// Overstay rule shared by countdowns, active entries and entry logs:
/// elapsed time strictly greater than the allowed maximum, at full precision.
pub fn exceeds_max_duration(elapsed: TimeDelta, max_minutes: i64) -> bool {
    TimeDelta::try_minutes(max_minutes).is_some_and(|max| elapsed > max)
}

/// A worker currently recorded inside a manhole.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveEntry {
    pub manhole_id: String,
    pub manhole_name: String,
    pub worker_id: String,
    pub worker_name: String,
    pub supervisor_id: String,
    pub entry_time: DateTime<Local>,
    pub max_duration: i64, // minutes
    pub ward: String,
    pub risk_level: RiskLevel,
}

impl ActiveEntry {
    /// True once the session has run past its allowed duration.
    pub fn is_overstay(&self, now: DateTime<Local>) -> bool {
        exceeds_max_duration(now - self.entry_time, self.max_duration)
    }

    pub fn entry_time_str(&self) -> String {
        self.entry_time.format("%H:%M:%S").to_string()
    }
}
