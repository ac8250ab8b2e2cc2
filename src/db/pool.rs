//! Handle on the SQLite state file.

use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// Several CLI processes (e.g. `watch` and `resolve`) may share the file.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open an existing state file. A missing file means `init` never ran.
    pub fn open(path: &str) -> AppResult<Self> {
        if !Path::new(path).exists() {
            return Err(AppError::NotInitialized);
        }
        Self::connect(path)
    }

    /// Create the state file if needed and bring its schema up to date.
    pub fn create(path: &str) -> AppResult<Self> {
        let pool = Self::connect(path)?;
        run_pending_migrations(&pool.conn)?;
        Ok(pool)
    }

    fn connect(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(Self { conn })
    }
}
