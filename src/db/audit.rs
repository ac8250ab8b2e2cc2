//! Audit trail: one row in the `log` table per state-changing operation.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::{Connection, params};

pub fn record(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![Local::now().to_rfc3339(), operation, target, message])?;
    Ok(())
}

/// A failed audit write never fails the operation it describes.
pub fn record_or_warn(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = record(conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}
