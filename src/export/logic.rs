// src/export/logic.rs

use crate::config::Config;
use crate::core::report::{GapLogic, employer_at, status_label};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{GapExport, IntervalExport, TabularExport};
use crate::export::pdf_export::export_pdf;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::models::gap_report::GapReport;
use crate::models::interval::EmploymentInterval;
use crate::models::threshold::GapThreshold;
use crate::ui::messages::warning;
use crate::utils::date::{month_name, span_days};
use crate::utils::formatting::fmt_date;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use std::path::Path;

/// High level export: interval history or the gap summary.
pub struct ExportLogic;

/// What a single export run was asked for.
pub struct ExportRequest<'a> {
    pub format: ExportFormat,
    pub file: &'a str,
    pub range: &'a Option<String>,
    pub gaps: bool,
    pub force: bool,
    pub threshold: GapThreshold,
    pub today: NaiveDate,
}

impl ExportLogic {
    /// Export intervals (default) or gaps (`req.gaps`).
    ///
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"`, or `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or two
    ///   of the same shape joined by `:`
    ///
    /// Gap rows keep the number they have in the full `gaps` listing even
    /// when a range filters some of them out.
    pub fn export(pool: &DbPool, cfg: &Config, req: ExportRequest<'_>) -> AppResult<()> {
        let path_buf = expand_tilde(req.file);
        let path = path_buf.as_path();

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                req.file
            )));
        }

        let bounds: Option<(NaiveDate, NaiveDate)> = match req.range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let (intervals, report) = GapLogic::load(pool, req.threshold, req.today)?;

        let title = build_pdf_title(req.range, req.gaps);
        let subtitle = format!(
            "{} as of {}",
            req.threshold.label(),
            fmt_date(req.today, &cfg.date_format)
        );

        if req.gaps {
            let rows = gap_rows(&intervals, &report, bounds);
            if rows.is_empty() {
                warning("No gaps found for the selected range.");
                return Ok(());
            }
            ensure_writable(path, req.force)?;
            write_rows(&rows, path, req.format, "Gaps", &title, &subtitle)
        } else {
            let rows = interval_rows(&intervals, &report, bounds, req.today);
            if rows.is_empty() {
                warning("No employment intervals found for the selected range.");
                return Ok(());
            }
            ensure_writable(path, req.force)?;
            write_rows(&rows, path, req.format, "Intervals", &title, &subtitle)
        }
    }
}

fn write_rows<T: TabularExport>(
    rows: &[T],
    path: &Path,
    format: ExportFormat,
    sheet: &str,
    title: &str,
    subtitle: &str,
) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
        ExportFormat::Xlsx => export_xlsx(rows, path, sheet),
        ExportFormat::Pdf => export_pdf(rows, path, title, subtitle),
    }
}

/// Intervals in chronological order; incomplete rows go last, in entry order.
fn interval_rows(
    intervals: &[EmploymentInterval],
    report: &GapReport,
    bounds: Option<(NaiveDate, NaiveDate)>,
    today: NaiveDate,
) -> Vec<IntervalExport> {
    let mut ordered: Vec<&EmploymentInterval> = intervals
        .iter()
        .filter(|iv| bounds.is_none_or(|(from, to)| iv.touches(from, to, today)))
        .collect();

    ordered.sort_by_key(|iv| (!iv.is_valid(), iv.start_date));

    ordered
        .into_iter()
        .map(|iv| {
            let days = match (iv.start_date, iv.effective_end(today)) {
                (Some(s), Some(e)) if iv.is_valid() && e >= s => Some(span_days(s, e)),
                _ => None,
            };
            let gap_after_days = report
                .gaps
                .iter()
                .filter(|st| st.gap.preceding_id == iv.id)
                .map(|st| st.gap.days)
                .sum();

            IntervalExport {
                id: iv.id,
                employer: iv.employer.clone(),
                start_date: iv.start_str(),
                end_date: iv.end_str(),
                is_current: iv.is_current,
                days,
                gap_after_days,
            }
        })
        .collect()
}

fn gap_rows(
    intervals: &[EmploymentInterval],
    report: &GapReport,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> Vec<GapExport> {
    report
        .gaps
        .iter()
        .enumerate()
        .filter(|(_, st)| bounds.is_none_or(|(from, to)| st.gap.overlaps(from, to)))
        .map(|(i, st)| GapExport {
            gap: i + 1,
            start_date: st.gap.start_str(),
            end_date: st.gap.end_str(),
            days: st.gap.days,
            after_employer: employer_at(intervals, st.gap.preceding_index).to_string(),
            before_employer: employer_at(intervals, st.gap.following_index).to_string(),
            status: status_label(st).to_string(),
            reason: st
                .explanation
                .as_ref()
                .map(|ex| ex.reason.clone())
                .unwrap_or_default(),
        })
        .collect()
}

/// PDF title from the selected period.
fn build_pdf_title(period: &Option<String>, gaps: bool) -> String {
    let what = if gaps { "Employment gaps" } else { "Employment history" };

    let Some(p) = period.as_deref().filter(|p| !p.eq_ignore_ascii_case("all")) else {
        return what.to_string();
    };

    match p.len() {
        4 => format!("{what} for year {p}"),
        7 => match p.split_once('-') {
            Some((y, m)) => format!("{what} for {} {y}", month_name(m)),
            None => what.to_string(),
        },
        10 => format!("{what} on {p}"),
        _ => match p.split_once(':') {
            Some((a, b)) => format!("{what} from {a} to {b}"),
            None => what.to_string(),
        },
    }
}
