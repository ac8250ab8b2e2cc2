use crate::core::generator::Dataset;
use crate::core::risk::RiskPolicy;
use crate::errors::{AppError, AppResult};
use crate::models::manhole::Manhole;

/// Derived values shown on a manhole profile.
#[derive(Debug, Clone)]
pub struct ManholeProfile<'a> {
    pub manhole: &'a Manhole,
    pub score: f64,
    pub meter_percent: f64,
    pub advice: &'static str,
    /// Worker currently inside, if any.
    pub occupied_by: Option<&'a str>,
}

pub fn lookup<'a>(dataset: &'a Dataset, id: &str) -> AppResult<&'a Manhole> {
    dataset
        .manhole(id)
        .ok_or_else(|| AppError::ManholeNotFound(id.to_string()))
}

pub fn build<'a>(
    dataset: &'a Dataset,
    policy: &RiskPolicy,
    id: &str,
) -> AppResult<ManholeProfile<'a>> {
    let manhole = lookup(dataset, id)?;
    let score = policy.score(&manhole.counters);

    let occupied_by = dataset
        .active_entries
        .iter()
        .find(|e| e.manhole_id == manhole.id)
        .map(|e| e.worker_name.as_str());

    Ok(ManholeProfile {
        manhole,
        score,
        meter_percent: policy.meter_percent(score),
        advice: manhole.risk_level.entry_advice(),
        occupied_by,
    })
}
