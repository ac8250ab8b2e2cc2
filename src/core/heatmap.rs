//! Risk distribution over the manhole network and a GeoJSON feed of
//! markers for map consumers.

use crate::core::generator::{Dataset, WARDS};
use crate::models::manhole::Manhole;
use crate::models::risk_level::RiskLevel;
use serde_json::{Value, json};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskCounts {
    pub safe: usize,
    pub caution: usize,
    pub danger: usize,
}

impl RiskCounts {
    pub fn add(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Safe => self.safe += 1,
            RiskLevel::Caution => self.caution += 1,
            RiskLevel::Danger => self.danger += 1,
        }
    }

    pub fn get(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Safe => self.safe,
            RiskLevel::Caution => self.caution,
            RiskLevel::Danger => self.danger,
        }
    }

    pub fn total(&self) -> usize {
        self.safe + self.caution + self.danger
    }
}

pub fn count_by_risk<'a>(manholes: impl IntoIterator<Item = &'a Manhole>) -> RiskCounts {
    let mut counts = RiskCounts::default();
    for m in manholes {
        counts.add(m.risk_level);
    }
    counts
}

/// Per-ward counts, in ward order.
pub fn count_by_ward(dataset: &Dataset) -> BTreeMap<&'static str, RiskCounts> {
    let mut out: BTreeMap<&'static str, RiskCounts> =
        WARDS.iter().map(|w| (*w, RiskCounts::default())).collect();

    for m in &dataset.manholes {
        if let Some(counts) = WARDS
            .iter()
            .find(|w| **w == m.ward)
            .and_then(|w| out.get_mut(w))
        {
            counts.add(m.risk_level);
        }
    }
    out
}

/// `None` keeps every level.
pub fn filter_by_risk(dataset: &Dataset, level: Option<RiskLevel>) -> Vec<&Manhole> {
    dataset
        .manholes
        .iter()
        .filter(|m| level.is_none_or(|l| m.risk_level == l))
        .collect()
}

/// GeoJSON FeatureCollection; coordinates are `[lng, lat]`.
pub fn to_geojson(manholes: &[&Manhole]) -> Value {
    let features: Vec<Value> = manholes
        .iter()
        .map(|m| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [m.lng, m.lat],
                },
                "properties": {
                    "id": m.id,
                    "name": m.name,
                    "ward": m.ward,
                    "risk": m.risk_level.as_str(),
                    "color": m.risk_level.color_hex(),
                    "radius": m.risk_level.marker_radius(),
                    "tooltip": format!("{} - {}", m.id, m.risk_level.as_str().to_uppercase()),
                },
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}
