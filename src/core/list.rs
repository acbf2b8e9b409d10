use crate::config::Config;
use crate::core::report::{GapLogic, status_label};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::gap_report::GapStatus;
use crate::models::interval::EmploymentInterval;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_gap, colorize_current, colorize_optional};
use crate::utils::date::span_days;
use crate::utils::formatting::fmt_date;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub struct ListLogic;

/// Chronological display order: complete intervals by start date (ties in
/// entry order), then the incomplete ones in entry order.
fn display_order(intervals: &[EmploymentInterval]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..intervals.len()).collect();
    idx.sort_by_key(|&i| {
        let iv = &intervals[i];
        (!iv.is_valid(), iv.start_date)
    });
    idx
}

fn gap_row(n: usize, status: &GapStatus, cfg: &Config) -> Vec<String> {
    let g = &status.gap;
    let color = color_for_gap(status.is_explained(), status.range_changed);
    let label = match &status.explanation {
        Some(ex) => format!("{} — {}", status_label(status), ex.reason),
        None => status_label(status).to_string(),
    };

    vec![
        String::new(),
        format!("{color}  gap #{n}{RESET}"),
        fmt_date(g.start_date, &cfg.date_format),
        fmt_date(g.end_date, &cfg.date_format),
        g.days.to_string(),
        format!("{color}{label}{RESET}"),
    ]
}

impl ListLogic {
    /// Print the history with every live-threshold gap inline, right before
    /// the first interval starting after it. Nested intervals stay above.
    pub fn print(pool: &DbPool, cfg: &Config, today: NaiveDate) -> AppResult<()> {
        let (intervals, report) = GapLogic::load(pool, cfg.live_threshold(), today)?;

        header("Employment history");

        if intervals.is_empty() {
            info("No employment intervals recorded yet.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 4),
            Column::new("Employer", 28),
            Column::new("Start", 12),
            Column::new("End", 12),
            Column::new("Days", 6),
            Column::new("Notes", 30),
        ]);

        let mut pending = report.gaps.iter().enumerate().peekable();

        for i in display_order(&intervals) {
            let iv = &intervals[i];

            while let Some((n, status)) = pending.next_if(|(_, st)| {
                !iv.is_valid() || iv.start_date.is_some_and(|s| s > st.gap.end_date)
            }) {
                table.add_row(gap_row(n + 1, status, cfg));
            }

            let days = match (iv.start_date, iv.effective_end(today)) {
                (Some(s), Some(e)) if e >= s => span_days(s, e).to_string(),
                _ => "--".to_string(),
            };
            let notes = if iv.is_valid() { "" } else { "incomplete" };

            table.add_row(vec![
                iv.id.to_string(),
                iv.employer.clone(),
                colorize_optional(&iv.start_str()),
                colorize_current(&iv.end_str()),
                colorize_optional(&days),
                notes.to_string(),
            ]);
        }

        for (n, status) in pending {
            table.add_row(gap_row(n + 1, status, cfg));
        }

        print!("{}", table.render());
        println!(
            "\n{} interval(s), {} gap(s), {} unexplained.",
            intervals.len(),
            report.gaps.len(),
            report.unexplained_count()
        );

        Ok(())
    }
}
