// src/export/excel_date.rs

use chrono::NaiveDate;

/// Interpret an ISO date cell as an Excel serial day number.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(("yyyy-mm-dd", naive_date_to_excel_serial(d)?))
}

fn naive_date_to_excel_serial(d: NaiveDate) -> Option<f64> {
    // 1899-12-30 absorbs Excel's fictitious 1900-02-29
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - excel_epoch).num_days() as f64)
}
