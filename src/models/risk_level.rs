use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Safe,
    Caution,
    Danger,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Safe, RiskLevel::Caution, RiskLevel::Danger];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Caution => "caution",
            RiskLevel::Danger => "danger",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "Safe",
            RiskLevel::Caution => "Caution",
            RiskLevel::Danger => "Danger",
        }
    }

    /// Entry decision shown on the location profile.
    pub fn entry_advice(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "✅ Entry Allowed",
            RiskLevel::Caution => "⚠️ Entry with Caution",
            RiskLevel::Danger => "🚫 Entry Prohibited",
        }
    }

    /// Map marker colour (hex).
    pub fn color_hex(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "#22c55e",
            RiskLevel::Caution => "#f59e0b",
            RiskLevel::Danger => "#ef4444",
        }
    }

    /// Map marker radius in pixels.
    pub fn marker_radius(&self) -> u32 {
        match self {
            RiskLevel::Safe => 6,
            RiskLevel::Caution => 8,
            RiskLevel::Danger => 10,
        }
    }

    pub fn is_danger(&self) -> bool {
        matches!(self, RiskLevel::Danger)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
