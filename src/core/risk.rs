//! Risk scoring: weighted sum of the four manhole counters, classified
//! against two strict thresholds.

use crate::errors::{AppError, AppResult};
use crate::models::manhole::RiskCounters;
use crate::models::risk_level::RiskLevel;
use serde::{Deserialize, Serialize};

/// Weights and thresholds of the scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskPolicy {
    pub incident_weight: f64,
    pub rainfall_weight: f64,
    pub blockage_weight: f64,
    pub overstay_weight: f64,
    /// Scores strictly above this are `danger`.
    pub danger_threshold: f64,
    /// Scores strictly above this (and not danger) are `caution`.
    pub caution_threshold: f64,
    /// Score that fills the risk meter to 100%.
    pub meter_max: f64,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            incident_weight: 2.0,
            rainfall_weight: 1.5,
            blockage_weight: 1.2,
            overstay_weight: 1.8,
            danger_threshold: 15.0,
            caution_threshold: 8.0,
            meter_max: 25.0,
        }
    }
}

impl RiskPolicy {
    pub fn score(&self, c: &RiskCounters) -> f64 {
        c.incident_count as f64 * self.incident_weight
            + c.rainfall_index * self.rainfall_weight
            + c.blockage_frequency as f64 * self.blockage_weight
            + c.overstay_count as f64 * self.overstay_weight
    }

    pub fn classify_score(&self, score: f64) -> RiskLevel {
        if score > self.danger_threshold {
            RiskLevel::Danger
        } else if score > self.caution_threshold {
            RiskLevel::Caution
        } else {
            RiskLevel::Safe
        }
    }

    pub fn classify(&self, c: &RiskCounters) -> RiskLevel {
        self.classify_score(self.score(c))
    }

    /// Risk meter fill in percent, capped at 100.
    pub fn meter_percent(&self, score: f64) -> f64 {
        if self.meter_max <= 0.0 {
            return 100.0;
        }
        (score / self.meter_max * 100.0).min(100.0)
    }

    /// Reject policies that cannot classify consistently.
    pub fn validate(&self) -> AppResult<()> {
        let weights = [
            self.incident_weight,
            self.rainfall_weight,
            self.blockage_weight,
            self.overstay_weight,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(AppError::Config(
                "risk weights must be finite and non-negative".into(),
            ));
        }
        if self.caution_threshold > self.danger_threshold {
            return Err(AppError::Config(format!(
                "risk.caution_threshold ({}) is above risk.danger_threshold ({})",
                self.caution_threshold, self.danger_threshold
            )));
        }
        Ok(())
    }
}

/// Build counters from raw CLI input, rejecting negative or non-finite rainfall.
pub fn counters_from_input(
    incidents: u32,
    rainfall: f64,
    blockages: u32,
    overstays: u32,
) -> AppResult<RiskCounters> {
    if !rainfall.is_finite() || rainfall < 0.0 {
        return Err(AppError::InvalidRiskInput(format!(
            "rainfall index must be a non-negative number, got {rainfall}"
        )));
    }

    Ok(RiskCounters {
        incident_count: incidents,
        rainfall_index: rainfall,
        blockage_frequency: blockages,
        overstay_count: overstays,
    })
}
