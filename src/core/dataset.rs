//! Rebuild the synthetic dataset from the stored anchor and overlay the
//! operator's resolutions.

use crate::config::Config;
use crate::core::generator::{Dataset, Generator};
use crate::db::pool::DbPool;
use crate::db::queries::{Anchor, load_anchor, resolved_alert_ids};
use crate::errors::{AppError, AppResult};
use std::collections::HashSet;

/// Pure rebuild: same anchor and config, same dataset.
pub fn build(cfg: &Config, anchor: &Anchor, resolved: &HashSet<String>) -> Dataset {
    let mut dataset = Generator::new(
        anchor.seed,
        anchor.anchored_at,
        &cfg.generator,
        &cfg.risk,
        &cfg.supervisor_id,
    )
    .generate();

    for alert in dataset.alerts.iter_mut() {
        if resolved.contains(&alert.id) {
            alert.resolved = true;
        }
    }

    dataset
}

pub struct LoadedState {
    pub pool: DbPool,
    pub dataset: Dataset,
}

pub fn load(cfg: &Config) -> AppResult<LoadedState> {
    cfg.validate()?;

    let pool = DbPool::open(&cfg.database)?;
    let anchor = load_anchor(&pool.conn)?.ok_or(AppError::NotInitialized)?;
    let resolved = resolved_alert_ids(&pool.conn)?;
    let dataset = build(cfg, &anchor, &resolved);

    Ok(LoadedState { pool, dataset })
}

/// Stored resolutions whose alert id no longer exists in the rebuilt dataset.
pub fn orphan_resolutions(cfg: &Config, pool: &DbPool) -> AppResult<Vec<String>> {
    let resolved = resolved_alert_ids(&pool.conn)?;
    let Some(anchor) = load_anchor(&pool.conn)? else {
        let mut all: Vec<String> = resolved.into_iter().collect();
        all.sort();
        return Ok(all);
    };

    let dataset = build(cfg, &anchor, &HashSet::new());
    let mut orphans: Vec<String> = resolved
        .into_iter()
        .filter(|id| dataset.alert(id).is_none())
        .collect();
    orphans.sort();
    Ok(orphans)
}
