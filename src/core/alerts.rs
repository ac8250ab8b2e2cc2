use crate::core::generator::Dataset;
use crate::db::audit;
use crate::db::pool::DbPool;
use crate::db::queries::insert_resolution;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    Resolved,
    AlreadyResolved,
}

/// Operator action: flag an alert resolved. Alerts are never deleted.
pub fn resolve(
    pool: &mut DbPool,
    dataset: &Dataset,
    alert_id: &str,
    note: &str,
) -> AppResult<ResolveOutcome> {
    let alert = dataset
        .alert(alert_id)
        .ok_or_else(|| AppError::AlertNotFound(alert_id.to_string()))?;

    if alert.resolved {
        return Ok(ResolveOutcome::AlreadyResolved);
    }

    if !insert_resolution(&pool.conn, &alert.id, note)? {
        return Ok(ResolveOutcome::AlreadyResolved);
    }

    audit::record_or_warn(
        &pool.conn,
        "resolve",
        &alert.id,
        &format!("{} alert at {} resolved", alert.kind.as_str(), alert.manhole_id),
    );

    Ok(ResolveOutcome::Resolved)
}
