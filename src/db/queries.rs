use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local};
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::HashSet;

/// Generator anchor stored by `init`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub seed: u64,
    pub anchored_at: DateTime<Local>,
}

fn has_table(conn: &Connection, name: &str) -> AppResult<bool> {
    let found: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

pub fn load_anchor(conn: &Connection) -> AppResult<Option<Anchor>> {
    if !has_table(conn, "dataset")? {
        return Ok(None);
    }

    let row: Option<(i64, String)> = conn
        .query_row(
            "SELECT seed, anchored_at FROM dataset WHERE id = 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    match row {
        None => Ok(None),
        Some((seed, raw)) => {
            let anchored_at = DateTime::parse_from_rfc3339(&raw)
                .map_err(|_| AppError::InvalidDate(raw.clone()))?
                .with_timezone(&Local);
            // INTEGER columns are signed: the seed round-trips bit for bit.
            Ok(Some(Anchor {
                seed: seed as u64,
                anchored_at,
            }))
        }
    }
}

pub fn save_anchor(conn: &Connection, anchor: &Anchor) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO dataset (id, seed, anchored_at) VALUES (1, ?1, ?2)",
        params![anchor.seed as i64, anchor.anchored_at.to_rfc3339()],
    )?;
    Ok(())
}

/// Record an operator resolution. Returns false if the alert was already resolved.
pub fn insert_resolution(conn: &Connection, alert_id: &str, note: &str) -> AppResult<bool> {
    let changed = conn.execute(
        "INSERT OR IGNORE INTO alert_resolutions (alert_id, resolved_at, note)
         VALUES (?1, ?2, ?3)",
        params![alert_id, Local::now().to_rfc3339(), note],
    )?;
    Ok(changed > 0)
}

pub fn resolved_alert_ids(conn: &Connection) -> AppResult<HashSet<String>> {
    if !has_table(conn, "alert_resolutions")? {
        return Ok(HashSet::new());
    }

    let mut stmt = conn.prepare("SELECT alert_id FROM alert_resolutions")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = HashSet::new();
    for r in rows {
        out.insert(r?);
    }
    Ok(out)
}

pub fn count_rows(conn: &Connection, table: &str) -> AppResult<i64> {
    if !has_table(conn, table)? {
        return Ok(0);
    }
    let n = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
    Ok(n)
}

/// Drop every stored resolution; used when the dataset is re-anchored.
pub fn clear_resolutions(conn: &Connection) -> AppResult<usize> {
    if !has_table(conn, "alert_resolutions")? {
        return Ok(0);
    }
    Ok(conn.execute("DELETE FROM alert_resolutions", [])?)
}
