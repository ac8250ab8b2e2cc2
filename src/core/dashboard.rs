use crate::core::generator::Dataset;
use crate::models::alert::Alert;
use crate::models::entry::ActiveEntry;
use chrono::{DateTime, Local};

/// Headline numbers of the supervisor dashboard (always across all wards).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub active_workers: usize,
    pub entries_today: usize,
    pub high_risk_zones: usize,
    pub alerts_triggered: usize,
    pub resolved_alerts: usize,
    pub total_manholes: usize,
    pub overstays_now: usize,
}

pub struct DashboardView<'a> {
    pub stats: DashboardStats,
    pub entries: Vec<&'a ActiveEntry>,
    pub alerts: Vec<&'a Alert>,
}

impl DashboardView<'_> {
    pub fn open_alerts(&self) -> usize {
        self.alerts.iter().filter(|a| !a.resolved).count()
    }
}

pub fn compute_stats(dataset: &Dataset, now: DateTime<Local>) -> DashboardStats {
    let today = now.date_naive();

    DashboardStats {
        active_workers: dataset.active_entries.len(),
        entries_today: dataset
            .entry_logs
            .iter()
            .filter(|l| l.entry_time.date_naive() == today)
            .count(),
        high_risk_zones: dataset
            .manholes
            .iter()
            .filter(|m| m.risk_level.is_danger())
            .count(),
        alerts_triggered: dataset.alerts.len(),
        resolved_alerts: dataset.alerts.iter().filter(|a| a.resolved).count(),
        total_manholes: dataset.manholes.len(),
        overstays_now: dataset
            .active_entries
            .iter()
            .filter(|e| e.is_overstay(now))
            .count(),
    }
}

/// `ward = None` shows every ward.
pub fn build_view<'a>(
    dataset: &'a Dataset,
    ward: Option<&str>,
    now: DateTime<Local>,
) -> DashboardView<'a> {
    let in_ward = |w: &str| ward.is_none_or(|f| f.eq_ignore_ascii_case(w));

    DashboardView {
        stats: compute_stats(dataset, now),
        entries: dataset
            .active_entries
            .iter()
            .filter(|e| in_ward(&e.ward))
            .collect(),
        alerts: dataset.alerts.iter().filter(|a| in_ward(&a.ward)).collect(),
    }
}
