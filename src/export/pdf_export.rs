use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, logs_to_table};
use crate::export::pdf::PdfManager;
use crate::export::{EntryLogExport, notify_export_success};
use crate::ui::messages::info;
use chrono::Local;
use std::path::Path;

/// Export PDF through PdfManager; overstay rows are highlighted.
pub(crate) fn export_pdf(logs: &[EntryLogExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let rows = logs_to_table(logs);
    let highlight: Vec<bool> = logs.iter().map(|l| l.overstay).collect();

    let overstays = highlight.iter().filter(|h| **h).count();
    let subtitle = format!(
        "{} entries, {} overstay(s) - generated {}",
        logs.len(),
        overstays,
        Local::now().format("%Y-%m-%d %H:%M")
    );

    let mut pdf = PdfManager::new();
    pdf.write_table(title, &subtitle, &headers, &rows, &highlight);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
