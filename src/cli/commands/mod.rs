pub mod alerts;
pub mod backup;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod export;
pub mod heatmap;
pub mod init;
pub mod log;
pub mod logs;
pub mod manhole;
pub mod qr;
pub mod score;
pub mod watch;

use crate::core::generator::canonical_ward;
use crate::errors::{AppError, AppResult};

/// Validate an optional `--ward` filter against the known wards.
pub(crate) fn parse_ward(ward: &Option<String>) -> AppResult<Option<&'static str>> {
    match ward {
        None => Ok(None),
        Some(w) => canonical_ward(w)
            .map(Some)
            .ok_or_else(|| AppError::InvalidWard(w.clone())),
    }
}
