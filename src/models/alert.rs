use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AlertKind {
    Overstay,
    HighRisk,
    Incident,
    Sos,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Overstay => "overstay",
            AlertKind::HighRisk => "high-risk",
            AlertKind::Incident => "incident",
            AlertKind::Sos => "sos",
        }
    }

    /// Overstay and distress signals are the urgent ones.
    pub fn is_critical(&self) -> bool {
        matches!(self, AlertKind::Overstay | AlertKind::Sos)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub id: String, // ALT-001
    pub kind: AlertKind,
    pub worker_id: String,
    pub worker_name: String,
    pub manhole_id: String,
    pub manhole_name: String,
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub resolved: bool,
    pub ward: String,
}
