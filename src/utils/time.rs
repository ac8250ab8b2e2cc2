//! Time utilities: formatting instants and elapsed spans for the terminal.

use chrono::{DateTime, Local};

pub fn format_clock(t: &DateTime<Local>) -> String {
    t.format("%H:%M:%S").to_string()
}

pub fn format_datetime(t: &DateTime<Local>) -> String {
    t.format("%Y-%m-%d %H:%M").to_string()
}

/// Coarse "time ago" label: `just now`, `12 min ago`, `3 h ago`, `2 d ago`.
pub fn ago(t: &DateTime<Local>, now: DateTime<Local>) -> String {
    let mins = (now - *t).num_minutes();
    if mins < 1 {
        "just now".to_string()
    } else if mins < 60 {
        format!("{mins} min ago")
    } else if mins < 24 * 60 {
        format!("{} h ago", mins / 60)
    } else {
        format!("{} d ago", mins / (24 * 60))
    }
}
