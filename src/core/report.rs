//! Gap report rendering for the CLI.

use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::{load_explanations, load_intervals};
use crate::errors::AppResult;
use crate::models::gap_report::{GapReport, GapStatus};
use crate::models::interval::EmploymentInterval;
use crate::models::threshold::GapThreshold;
use crate::ui::messages::{gap_notice, header, hint, success, warning};
use crate::utils::colors::{RESET, color_for_gap};
use crate::utils::days2readable;
use crate::utils::formatting::fmt_date;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub struct GapLogic;

/// Employer name for an index in the caller ordering.
pub(crate) fn employer_at(intervals: &[EmploymentInterval], index: usize) -> &str {
    intervals
        .get(index)
        .map(|iv| iv.employer.as_str())
        .unwrap_or("?")
}

pub(crate) fn status_label(status: &GapStatus) -> &'static str {
    match (&status.explanation, status.range_changed) {
        (Some(_), false) => "explained",
        (Some(_), true) => "explained (range changed)",
        (None, _) => "UNEXPLAINED",
    }
}

impl GapLogic {
    /// Load history and explanations, then build the report.
    pub fn load(
        pool: &DbPool,
        threshold: GapThreshold,
        today: NaiveDate,
    ) -> AppResult<(Vec<EmploymentInterval>, GapReport)> {
        let intervals = load_intervals(&pool.conn)?;
        let explanations = load_explanations(&pool.conn)?;
        let report = Core::build_gap_report(&intervals, &explanations, today, threshold);
        Ok((intervals, report))
    }

    /// Print the gap table for `threshold`. Rows are numbered by their
    /// position in the full report, which is what `explain --gap` expects.
    pub fn print(
        pool: &DbPool,
        cfg: &Config,
        threshold: GapThreshold,
        today: NaiveDate,
        unexplained_only: bool,
    ) -> AppResult<()> {
        let (intervals, report) = Self::load(pool, threshold, today)?;

        header(format!(
            "Employment gaps ({}) as of {}",
            threshold.label(),
            fmt_date(today, &cfg.date_format)
        ));

        if report.gaps.is_empty() {
            success("No employment gaps found.");
        } else {
            let mut table = Table::new(vec![
                Column::new("#", 3),
                Column::new("From", 12),
                Column::new("To", 12),
                Column::new("Days", 6),
                Column::new("After", 20),
                Column::new("Before", 20),
                Column::new("Status", 26),
            ]);

            for (i, status) in report.gaps.iter().enumerate() {
                if unexplained_only && status.is_explained() {
                    continue;
                }

                let g = &status.gap;
                let color = color_for_gap(status.is_explained(), status.range_changed);

                table.add_row(vec![
                    (i + 1).to_string(),
                    fmt_date(g.start_date, &cfg.date_format),
                    fmt_date(g.end_date, &cfg.date_format),
                    g.days.to_string(),
                    employer_at(&intervals, g.preceding_index).to_string(),
                    employer_at(&intervals, g.following_index).to_string(),
                    format!("{color}{}{RESET}", status_label(status)),
                ]);
            }

            print!("{}", table.render());

            for (i, status) in report.gaps.iter().enumerate() {
                if let Some(ex) = &status.explanation
                    && !unexplained_only
                {
                    println!("  #{} reason: {}", i + 1, ex.reason);
                }
            }

            println!();
            println!(
                "{} gap(s), {} unexplained, {} uncovered in total.",
                report.gaps.len(),
                report.unexplained_count(),
                days2readable(report.total_gap_days())
            );

            if report.unexplained_count() > 0 {
                hint("Explain a gap with: gapcheck explain --gap <#> --reason \"...\"");
            }
        }

        if !report.orphaned.is_empty() {
            println!();
            warning(format!(
                "{} explanation(s) no longer match a gap at this threshold:",
                report.orphaned.len()
            ));
            for ex in &report.orphaned {
                println!("  [{}] {} : {}", ex.id, ex.range_str(), ex.reason);
            }
            hint("Remove stale explanations with: gapcheck explain --prune");
        }

        Ok(())
    }

    /// Recompute with the live threshold after the history changed and
    /// report the gaps still waiting for an explanation.
    pub fn notify_after_change(pool: &DbPool, cfg: &Config, today: NaiveDate) -> AppResult<()> {
        let (intervals, report) = Self::load(pool, cfg.live_threshold(), today)?;

        for (i, status) in report.gaps.iter().enumerate() {
            let g = &status.gap;
            if !status.is_explained() {
                gap_notice(format!(
                    "Gap #{}: {} → {} ({}) between {} and {} needs an explanation.",
                    i + 1,
                    fmt_date(g.start_date, &cfg.date_format),
                    fmt_date(g.end_date, &cfg.date_format),
                    days2readable(g.days),
                    employer_at(&intervals, g.preceding_index),
                    employer_at(&intervals, g.following_index),
                ));
            } else if status.range_changed {
                warning(format!(
                    "Gap #{} changed to {} → {}: please confirm its explanation.",
                    i + 1,
                    fmt_date(g.start_date, &cfg.date_format),
                    fmt_date(g.end_date, &cfg.date_format),
                ));
            }
        }

        Ok(())
    }
}
