// src/export/model.rs

use serde::Serialize;

/// A flat record that can be written to every export format.
pub trait TabularExport: Serialize {
    /// Column headers for CSV / XLSX / PDF (same order as `to_row`).
    fn headers() -> Vec<&'static str>;

    /// Cell values as strings (PDF and XLSX).
    fn to_row(&self) -> Vec<String>;
}

/// One employment interval, flattened for export.
#[derive(Serialize, Clone, Debug)]
pub struct IntervalExport {
    pub id: i64,
    pub employer: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: bool,
    pub days: Option<i64>,
    /// Uncovered days right after this interval (gaps at the export threshold).
    pub gap_after_days: i64,
}

impl TabularExport for IntervalExport {
    fn headers() -> Vec<&'static str> {
        vec![
            "id",
            "employer",
            "start_date",
            "end_date",
            "is_current",
            "days",
            "gap_after_days",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.employer.clone(),
            self.start_date.clone(),
            self.end_date.clone(),
            if self.is_current { "yes" } else { "no" }.to_string(),
            self.days.map(|d| d.to_string()).unwrap_or_default(),
            self.gap_after_days.to_string(),
        ]
    }
}

/// One detected gap with its explanation status.
#[derive(Serialize, Clone, Debug)]
pub struct GapExport {
    pub gap: usize,
    pub start_date: String,
    pub end_date: String,
    pub days: i64,
    pub after_employer: String,
    pub before_employer: String,
    pub status: String,
    pub reason: String,
}

impl TabularExport for GapExport {
    fn headers() -> Vec<&'static str> {
        vec![
            "gap",
            "start_date",
            "end_date",
            "days",
            "after_employer",
            "before_employer",
            "status",
            "reason",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.gap.to_string(),
            self.start_date.clone(),
            self.end_date.clone(),
            self.days.to_string(),
            self.after_employer.clone(),
            self.before_employer.clone(),
            self.status.clone(),
            self.reason.clone(),
        ]
    }
}

pub(crate) fn to_table<T: TabularExport>(items: &[T]) -> Vec<Vec<String>> {
    items.iter().map(TabularExport::to_row).collect()
}
