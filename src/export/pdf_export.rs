// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{TabularExport, to_table};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF: one table, paginated, with a title and an optional subtitle line.
pub(crate) fn export_pdf<T: TabularExport>(
    items: &[T],
    path: &Path,
    title: &str,
    subtitle: &str,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = T::headers();
    let rows = to_table(items);

    let mut pdf = PdfManager::new();
    pdf.write_table(title, subtitle, &headers, &rows);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
