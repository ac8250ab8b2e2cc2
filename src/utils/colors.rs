/// ANSI color helper utilities for terminal output.
use crate::models::alert::AlertKind;
use crate::models::risk_level::RiskLevel;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

pub fn color_for_risk(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Safe => GREEN,
        RiskLevel::Caution => YELLOW,
        RiskLevel::Danger => RED,
    }
}

/// Badge like `🔴 Danger`, coloured by level.
pub fn risk_badge(level: RiskLevel) -> String {
    let icon = match level {
        RiskLevel::Safe => "🟢",
        RiskLevel::Caution => "🟡",
        RiskLevel::Danger => "🔴",
    };
    format!("{icon} {}{}{}", color_for_risk(level), level.label(), RESET)
}

pub fn color_for_alert(kind: AlertKind) -> &'static str {
    if kind.is_critical() { RED } else { YELLOW }
}

/// Returns formatted grey text for empty placeholders.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_flag(value: &str, alarm: bool) -> String {
    if alarm {
        format!("{RED}{value}{RESET}")
    } else {
        format!("{GREEN}{value}{RESET}")
    }
}
