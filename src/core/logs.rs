use crate::models::entry_log::EntryLog;
use chrono::{DateTime, Local};

/// Entry-log filter: free-text search plus an optional overstay-only switch.
#[derive(Debug, Default, Clone)]
pub struct LogFilter {
    pub search: Option<String>,
    pub overstay_only: bool,
}

impl LogFilter {
    pub fn apply<'a>(&self, logs: &'a [EntryLog], now: DateTime<Local>) -> Vec<&'a EntryLog> {
        logs.iter()
            .filter(|l| match self.search.as_deref().map(str::trim) {
                None | Some("") => true,
                Some(needle) => l.matches(needle),
            })
            .filter(|l| !self.overstay_only || l.is_overstay(now))
            .collect()
    }
}
