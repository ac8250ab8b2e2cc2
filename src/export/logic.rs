use crate::core::generator::Dataset;
use crate::core::logs::LogFilter;
use crate::db::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryLogExport;
use crate::export::pdf_export::export_pdf;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use chrono::{DateTime, Local, NaiveDate};
use std::path::Path;

/// High-level export of entry logs.
pub struct ExportLogic;

impl ExportLogic {
    /// Export entry logs.
    ///
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"` or one of
    ///   `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `YYYY:YYYY`, `YYYY-MM:YYYY-MM`,
    ///   `YYYY-MM-DD:YYYY-MM-DD` (matched on entry date)
    ///
    /// Returns the number of exported rows.
    #[allow(clippy::too_many_arguments)]
    pub fn export(
        pool: &mut DbPool,
        dataset: &Dataset,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        filter: &LogFilter,
        force: bool,
        now: DateTime<Local>,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = collect_rows(dataset, date_bounds, filter, now);

        if rows.is_empty() {
            warning("No entry logs found for the selected range. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
            ExportFormat::Pdf => export_pdf(&rows, path, &build_pdf_title(range))?,
        }

        audit::record_or_warn(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("{} entry logs exported as {}", rows.len(), format.as_str()),
        );

        Ok(rows.len())
    }
}

/// Filtered, date-bounded rows in entry order.
pub fn collect_rows(
    dataset: &Dataset,
    bounds: Option<(NaiveDate, NaiveDate)>,
    filter: &LogFilter,
    now: DateTime<Local>,
) -> Vec<EntryLogExport> {
    let mut rows: Vec<EntryLogExport> = filter
        .apply(&dataset.entry_logs, now)
        .into_iter()
        .filter(|l| match bounds {
            None => true,
            Some((start, end)) => {
                let d = l.entry_time.date_naive();
                d >= start && d <= end
            }
        })
        .map(|l| EntryLogExport::from_log(l, now))
        .collect();

    rows.sort_by(|a, b| a.entry_time.cmp(&b.entry_time).then(a.id.cmp(&b.id)));
    rows
}

/// PDF title for the selected period.
fn build_pdf_title(period: &Option<String>) -> String {
    match period.as_deref() {
        None => "Manhole entry logs".to_string(),
        Some(p) if p.eq_ignore_ascii_case("all") => "Manhole entry logs".to_string(),
        Some(p) => match p.split_once(':') {
            Some((from, to)) => format!("Manhole entry logs from {} to {}", from, to),
            None => format!("Manhole entry logs for {}", p),
        },
    }
}
