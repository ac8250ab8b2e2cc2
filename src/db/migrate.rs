use crate::ui::messages::success;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![Local::now().to_rfc3339(), version, message],
    )?;
    success(format!("Migration applied: {version} → {message}"));
    Ok(())
}

/// Single-row table holding the generator anchor.
fn create_dataset_table(conn: &Connection) -> Result<()> {
    if table_exists(conn, "dataset")? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE dataset (
            id           INTEGER PRIMARY KEY CHECK(id = 1),
            seed         INTEGER NOT NULL,
            anchored_at  TEXT NOT NULL
        );
        "#,
    )?;
    mark_applied(conn, "0.1.0-dataset", "Created dataset anchor table")
}

fn create_resolutions_table(conn: &Connection) -> Result<()> {
    if table_exists(conn, "alert_resolutions")? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE alert_resolutions (
            alert_id     TEXT PRIMARY KEY,
            resolved_at  TEXT NOT NULL
        );
        "#,
    )?;
    mark_applied(conn, "0.1.0-resolutions", "Created alert_resolutions table")
}

/// Resolutions carry an optional operator note.
fn migrate_add_note_column(conn: &Connection) -> Result<()> {
    if column_exists(conn, "alert_resolutions", "note")? {
        return Ok(());
    }

    conn.execute(
        "ALTER TABLE alert_resolutions ADD COLUMN note TEXT NOT NULL DEFAULT '';",
        [],
    )?;
    mark_applied(conn, "0.1.1-resolution-note", "Added note to alert_resolutions")
}

/// Public entry point: run all pending migrations.
///
/// Invoked by `DbPool::create` and `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_dataset_table(conn)?;
    create_resolutions_table(conn)?;
    migrate_add_note_column(conn)?;
    Ok(())
}
