//! Seeded synthetic dataset.
//!
//! Everything is derived from a `ChaCha8Rng` seed and an anchor instant, so the
//! same `(seed, anchor, settings, policy)` always produces the same dataset.

use crate::core::risk::RiskPolicy;
use crate::models::alert::{Alert, AlertKind};
use crate::models::entry::ActiveEntry;
use crate::models::entry_log::EntryLog;
use crate::models::manhole::{CleaningRecord, Incident, Manhole, RiskCounters};
use crate::models::risk_level::RiskLevel;
use crate::models::worker::Worker;
use chrono::{DateTime, Duration, Local};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

pub const WARDS: [&str; 6] = ["Ward A", "Ward B", "Ward C", "Ward D", "Ward E", "Ward F"];

const CREW_NAMES: [&str; 4] = ["Crew Alpha", "Crew Beta", "Crew Gamma", "Crew Delta"];

const INCIDENT_TYPES: [&str; 4] = ["Blockage", "Gas Detected", "Structural Damage", "Overflow"];

const WORKER_NAMES: [&str; 12] = [
    "Ramesh Jadhav",
    "Sunil Patil",
    "Mahesh Kamble",
    "Rajesh Mane",
    "Vikram Shinde",
    "Anil Deshmukh",
    "Sanjay Gaikwad",
    "Pravin Pawar",
    "Deepak Sonawane",
    "Ganesh Bhosale",
    "Sachin Kale",
    "Nilesh Thorat",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub manhole_count: usize,
    pub active_entries: usize,
    pub entry_logs: usize,
    pub max_duration_minutes: i64,
    pub center_lat: f64,
    pub center_lng: f64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        // Solapur
        Self {
            manhole_count: 120,
            active_entries: 5,
            entry_logs: 30,
            max_duration_minutes: 45,
            center_lat: 17.6599,
            center_lng: 75.9064,
        }
    }
}

/// Full in-memory dataset.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub anchor: DateTime<Local>,
    pub manholes: Vec<Manhole>,
    pub workers: Vec<Worker>,
    pub active_entries: Vec<ActiveEntry>,
    pub alerts: Vec<Alert>,
    pub entry_logs: Vec<EntryLog>,
}

impl Dataset {
    pub fn manhole(&self, id: &str) -> Option<&Manhole> {
        self.manholes.iter().find(|m| m.id.eq_ignore_ascii_case(id))
    }

    pub fn worker(&self, id: &str) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id.eq_ignore_ascii_case(id))
    }

    pub fn alert(&self, id: &str) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.id.eq_ignore_ascii_case(id))
    }
}

pub struct Generator<'a> {
    rng: ChaCha8Rng,
    anchor: DateTime<Local>,
    settings: &'a GeneratorSettings,
    policy: &'a RiskPolicy,
    supervisor_id: &'a str,
}

impl<'a> Generator<'a> {
    pub fn new(
        seed: u64,
        anchor: DateTime<Local>,
        settings: &'a GeneratorSettings,
        policy: &'a RiskPolicy,
        supervisor_id: &'a str,
    ) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            anchor,
            settings,
            policy,
            supervisor_id,
        }
    }

    /// Generate every collection in dependency order.
    pub fn generate(mut self) -> Dataset {
        let manholes = self.generate_manholes();
        let mut workers = self.generate_workers();
        let active_entries = self.generate_active_entries(&manholes, &mut workers);
        let alerts = self.generate_alerts(&manholes, &workers, &active_entries);
        let entry_logs = self.generate_entry_logs(&manholes, &active_entries);

        Dataset {
            anchor: self.anchor,
            manholes,
            workers,
            active_entries,
            alerts,
            entry_logs,
        }
    }

    fn between(&mut self, a: f64, b: f64) -> f64 {
        self.rng.r#gen::<f64>() * (b - a) + a
    }

    fn days_ago(&self, days: i64) -> chrono::NaiveDate {
        (self.anchor - Duration::days(days)).date_naive()
    }

    pub fn generate_manholes(&mut self) -> Vec<Manhole> {
        let mut manholes = Vec::with_capacity(self.settings.manhole_count);

        for i in 1..=self.settings.manhole_count {
            let counters = RiskCounters {
                incident_count: self.rng.gen_range(0..8),
                rainfall_index: round1(self.between(0.0, 5.0)),
                blockage_frequency: self.rng.gen_range(0..6),
                overstay_count: self.rng.gen_range(0..4),
            };
            let ward = WARDS[i % WARDS.len()].to_string();

            let lat = self.settings.center_lat + self.between(-0.04, 0.04);
            let lng = self.settings.center_lng + self.between(-0.05, 0.05);
            let depth = round1(self.between(2.0, 8.0));
            let cleaned_days_ago: i64 = self.rng.gen_range(1..90);
            let last_cleaned = self.days_ago(cleaned_days_ago);

            let cleanings = self.rng.gen_range(2..6);
            let mut cleaning_history = Vec::with_capacity(cleanings);
            for j in 0..cleanings {
                let spacing: i64 = self.rng.gen_range(15..45);
                cleaning_history.push(CleaningRecord {
                    date: self.days_ago((j as i64 + 1) * spacing),
                    crew: CREW_NAMES[j % CREW_NAMES.len()].to_string(),
                    notes: if j == 0 {
                        "Routine cleaning completed".to_string()
                    } else {
                        "Deep cleaning performed".to_string()
                    },
                });
            }

            let mut incidents = Vec::with_capacity(counters.incident_count as usize);
            for j in 0..counters.incident_count as usize {
                let spacing: i64 = self.rng.gen_range(10..60);
                incidents.push(Incident {
                    date: self.days_ago(j as i64 * spacing),
                    kind: INCIDENT_TYPES[j % INCIDENT_TYPES.len()].to_string(),
                    description: "Incident recorded during routine inspection".to_string(),
                    resolved: self.rng.gen_bool(0.8),
                });
            }

            manholes.push(Manhole {
                id: manhole_id(i),
                name: format!("Manhole {i} - {ward}"),
                lat,
                lng,
                ward,
                depth,
                last_cleaned,
                risk_level: self.policy.classify(&counters),
                counters,
                cleaning_history,
                incidents,
            });
        }

        manholes
    }

    pub fn generate_workers(&mut self) -> Vec<Worker> {
        WORKER_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| Worker {
                id: worker_id(i + 1),
                name: name.to_string(),
                phone: format!("+91 98{}", self.rng.gen_range(10_000_000..99_999_999)),
                badge: format!("B-{:03}", i + 1),
                active_entry: None,
            })
            .collect()
    }

    /// Worker `i` enters manhole `3·i`; the worker keeps a back reference.
    pub fn generate_active_entries(
        &mut self,
        manholes: &[Manhole],
        workers: &mut [Worker],
    ) -> Vec<ActiveEntry> {
        let mut entries = Vec::new();

        for (i, w) in workers
            .iter_mut()
            .take(self.settings.active_entries)
            .enumerate()
        {
            let Some(m) = manholes.get(i * 3) else { break };
            let minutes_ago: i64 = self.rng.gen_range(5..55);

            w.active_entry = Some(m.id.clone());
            entries.push(ActiveEntry {
                manhole_id: m.id.clone(),
                manhole_name: m.name.clone(),
                worker_id: w.id.clone(),
                worker_name: w.name.clone(),
                supervisor_id: self.supervisor_id.to_string(),
                entry_time: self.anchor - Duration::minutes(minutes_ago),
                max_duration: self.settings.max_duration_minutes,
                ward: m.ward.clone(),
                risk_level: m.risk_level,
            });
        }

        entries
    }

    /// Alerts follow the state at the anchor: overstays, high-risk entries and
    /// open incidents at occupied manholes, plus one historical resolved alert.
    pub fn generate_alerts(
        &mut self,
        manholes: &[Manhole],
        workers: &[Worker],
        entries: &[ActiveEntry],
    ) -> Vec<Alert> {
        let mut alerts: Vec<Alert> = Vec::new();
        let next_id = |alerts: &Vec<Alert>| format!("ALT-{:03}", alerts.len() + 1);

        for e in entries {
            if e.is_overstay(self.anchor) {
                alerts.push(Alert {
                    id: next_id(&alerts),
                    kind: AlertKind::Overstay,
                    worker_id: e.worker_id.clone(),
                    worker_name: e.worker_name.clone(),
                    manhole_id: e.manhole_id.clone(),
                    manhole_name: e.manhole_name.clone(),
                    timestamp: e.entry_time + Duration::minutes(e.max_duration),
                    message: format!(
                        "Worker {} has exceeded max duration at {}",
                        e.worker_name, e.manhole_name
                    ),
                    resolved: false,
                    ward: e.ward.clone(),
                });
            }

            if e.risk_level == RiskLevel::Danger {
                alerts.push(Alert {
                    id: next_id(&alerts),
                    kind: AlertKind::HighRisk,
                    worker_id: e.worker_id.clone(),
                    worker_name: e.worker_name.clone(),
                    manhole_id: e.manhole_id.clone(),
                    manhole_name: e.manhole_name.clone(),
                    timestamp: e.entry_time,
                    message: format!("High risk entry at {}", e.manhole_name),
                    resolved: false,
                    ward: e.ward.clone(),
                });
            }

            let open = manholes
                .iter()
                .find(|m| m.id == e.manhole_id)
                .map(|m| m.open_incidents())
                .unwrap_or(0);
            if open > 0 {
                alerts.push(Alert {
                    id: next_id(&alerts),
                    kind: AlertKind::Incident,
                    worker_id: e.worker_id.clone(),
                    worker_name: e.worker_name.clone(),
                    manhole_id: e.manhole_id.clone(),
                    manhole_name: e.manhole_name.clone(),
                    timestamp: e.entry_time,
                    message: format!(
                        "{open} open incident(s) recorded at {} during active entry",
                        e.manhole_name
                    ),
                    resolved: false,
                    ward: e.ward.clone(),
                });
            }
        }

        let danger = manholes.iter().find(|m| m.risk_level == RiskLevel::Danger);
        if let (Some(m), Some(w)) = (danger, workers.get(7).or(workers.last())) {
            let number = m.id.trim_start_matches("MH-SOL-").trim_start_matches('0');
            alerts.push(Alert {
                id: next_id(&alerts),
                kind: AlertKind::HighRisk,
                worker_id: w.id.clone(),
                worker_name: w.name.clone(),
                manhole_id: m.id.clone(),
                manhole_name: m.name.clone(),
                timestamp: self.anchor - Duration::hours(1),
                message: format!("High risk entry attempted at Manhole {number}"),
                resolved: true,
                ward: m.ward.clone(),
            });
        }

        alerts
    }

    /// Completed history first, then one ongoing record per active entry.
    pub fn generate_entry_logs(
        &mut self,
        manholes: &[Manhole],
        entries: &[ActiveEntry],
    ) -> Vec<EntryLog> {
        let mut logs = Vec::with_capacity(self.settings.entry_logs + entries.len());
        if manholes.is_empty() {
            return logs;
        }

        for i in 0..self.settings.entry_logs {
            let offset: i64 = self.rng.gen_range(0..3600);
            let entry_time = self.anchor - Duration::hours(i as i64) - Duration::seconds(offset);
            let duration: i64 = self.rng.gen_range(15..60);
            let m = &manholes[self.rng.gen_range(0..manholes.len())];
            let w = i % WORKER_NAMES.len();

            logs.push(EntryLog {
                id: log_id(logs.len() + 1),
                worker_id: worker_id(w + 1),
                worker_name: WORKER_NAMES[w].to_string(),
                manhole_id: m.id.clone(),
                manhole_name: m.name.clone(),
                entry_time,
                exit_time: Some(entry_time + Duration::minutes(duration)),
                max_duration: self.settings.max_duration_minutes,
                risk_level: m.risk_level,
                ward: m.ward.clone(),
            });
        }

        for e in entries {
            logs.push(EntryLog {
                id: log_id(logs.len() + 1),
                worker_id: e.worker_id.clone(),
                worker_name: e.worker_name.clone(),
                manhole_id: e.manhole_id.clone(),
                manhole_name: e.manhole_name.clone(),
                entry_time: e.entry_time,
                exit_time: None,
                max_duration: e.max_duration,
                risk_level: e.risk_level,
                ward: e.ward.clone(),
            });
        }

        logs
    }
}

pub fn manhole_id(n: usize) -> String {
    format!("MH-SOL-{n:04}")
}

fn worker_id(n: usize) -> String {
    format!("WKR-{n:03}")
}

fn log_id(n: usize) -> String {
    format!("LOG-{n:04}")
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Validate a ward filter against the generated wards (case-insensitive).
pub fn canonical_ward(input: &str) -> Option<&'static str> {
    WARDS
        .iter()
        .copied()
        .find(|w| w.eq_ignore_ascii_case(input.trim()))
}
