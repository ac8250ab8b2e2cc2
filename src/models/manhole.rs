use super::risk_level::RiskLevel;
use chrono::NaiveDate;
use serde::Serialize;

/// The four counters the risk level is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RiskCounters {
    pub incident_count: u32,
    pub rainfall_index: f64,
    pub blockage_frequency: u32,
    pub overstay_count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CleaningRecord {
    pub date: NaiveDate,
    pub crew: String,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Incident {
    pub date: NaiveDate,
    pub kind: String,
    pub description: String,
    pub resolved: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Manhole {
    pub id: String,   // MH-SOL-0001
    pub name: String, // "Manhole 1 - Ward B"
    pub lat: f64,
    pub lng: f64,
    pub ward: String,
    pub depth: f64, // metres
    pub last_cleaned: NaiveDate,
    pub risk_level: RiskLevel,
    pub counters: RiskCounters,
    pub cleaning_history: Vec<CleaningRecord>,
    pub incidents: Vec<Incident>,
}

impl Manhole {
    pub fn last_cleaned_str(&self) -> String {
        self.last_cleaned.format("%Y-%m-%d").to_string()
    }

    pub fn open_incidents(&self) -> usize {
        self.incidents.iter().filter(|i| !i.resolved).count()
    }
}
