//! Formatting utilities used for CLI and export outputs.

use chrono::NaiveDate;

/// Human-readable duration: "62 days (≈ 2 months)".
pub fn days2readable(days: i64) -> String {
    let unit = if days == 1 { "day" } else { "days" };

    if days < 31 {
        return format!("{days} {unit}");
    }

    let months = days / 30;
    if months < 12 {
        let m_unit = if months == 1 { "month" } else { "months" };
        format!("{days} {unit} (≈ {months} {m_unit})")
    } else {
        let years = days as f64 / 365.25;
        format!("{days} {unit} (≈ {years:.1} years)")
    }
}

/// Format a date with the user's display format, falling back to ISO.
pub fn fmt_date(d: NaiveDate, pattern: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    if write!(out, "{}", d.format(pattern)).is_err() {
        return d.format("%Y-%m-%d").to_string();
    }
    out
}
