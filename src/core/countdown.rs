//! Countdown of a single active entry: signed remaining time, display phase
//! and progress. Pure: every value is derived from `(entry_time, max, now)`.

use crate::models::entry::{ActiveEntry, exceeds_max_duration};
use crate::utils::colors::{GREEN, RED, RESET, YELLOW};
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Normal,
    /// Elapsed time is past the warning ratio of the maximum.
    Warning,
    /// Elapsed time is strictly past the maximum.
    Overstay,
}

impl Phase {
    pub fn color(&self) -> &'static str {
        match self {
            Phase::Normal => GREEN,
            Phase::Warning => YELLOW,
            Phase::Overstay => RED,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    pub entry_time: DateTime<Local>,
    pub max_duration_minutes: i64,
    pub warning_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountdownState {
    pub elapsed_ms: i64,
    /// Negative once the maximum has been exceeded.
    pub remaining_ms: i64,
    pub phase: Phase,
    /// `elapsed / max`, capped at 1.0.
    pub progress: f64,
}

impl Countdown {
    pub fn new(entry_time: DateTime<Local>, max_duration_minutes: i64, warning_ratio: f64) -> Self {
        Self {
            entry_time,
            max_duration_minutes,
            warning_ratio,
        }
    }

    pub fn for_entry(entry: &ActiveEntry, warning_ratio: f64) -> Self {
        Self::new(entry.entry_time, entry.max_duration, warning_ratio)
    }

    fn max_ms(&self) -> i64 {
        self.max_duration_minutes.saturating_mul(60_000)
    }

    pub fn at(&self, now: DateTime<Local>) -> CountdownState {
        let elapsed = now - self.entry_time;
        let elapsed_ms = elapsed.num_milliseconds();
        let max_ms = self.max_ms();
        let remaining_ms = max_ms.saturating_sub(elapsed_ms);

        let phase = if exceeds_max_duration(elapsed, self.max_duration_minutes) {
            Phase::Overstay
        } else if elapsed_ms as f64 > max_ms as f64 * self.warning_ratio {
            Phase::Warning
        } else {
            Phase::Normal
        };

        let progress = if max_ms <= 0 {
            1.0
        } else {
            (elapsed_ms as f64 / max_ms as f64).clamp(0.0, 1.0)
        };

        CountdownState {
            elapsed_ms,
            remaining_ms,
            phase,
            progress,
        }
    }
}

impl CountdownState {
    pub fn is_overstay(&self) -> bool {
        self.phase == Phase::Overstay
    }

    /// `(minutes, seconds)` of the absolute remaining time.
    fn mm_ss(&self) -> (i64, i64) {
        let abs = self.remaining_ms.saturating_abs();
        (abs / 60_000, (abs % 60_000) / 1000)
    }

    /// `MM:SS` while time remains, `-MM:SS` once overstayed.
    pub fn compact(&self) -> String {
        let (m, s) = self.mm_ss();
        let sign = if self.is_overstay() { "-" } else { "" };
        format!("{sign}{m:02}:{s:02}")
    }

    /// `MM:SS` while time remains, `OVERSTAY -MM:SS` once overstayed.
    pub fn full(&self) -> String {
        let (m, s) = self.mm_ss();
        let prefix = if self.is_overstay() { "OVERSTAY -" } else { "" };
        format!("{prefix}{m:02}:{s:02}")
    }

    /// Text progress bar of `width` cells.
    pub fn bar(&self, width: usize) -> String {
        let filled = ((self.progress * width as f64).round() as usize).min(width);
        format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
    }

    pub fn colored_full(&self) -> String {
        format!("{}{}{}", self.phase.color(), self.full(), RESET)
    }

    pub fn colored_bar(&self, width: usize) -> String {
        format!("{}{}{}", self.phase.color(), self.bar(width), RESET)
    }
}
