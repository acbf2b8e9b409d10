use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_intervals;
use crate::errors::AppResult;
use crate::models::reference::ReferencePlan;
use crate::models::threshold::GapThreshold;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{GREY, MAGENTA, RESET};
use crate::utils::formatting::fmt_date;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub struct ReferenceLogic;

impl ReferenceLogic {
    pub fn plan(
        pool: &DbPool,
        threshold: GapThreshold,
        today: NaiveDate,
    ) -> AppResult<ReferencePlan> {
        let intervals = load_intervals(&pool.conn)?;
        Ok(Core::build_reference_plan(&intervals, today, threshold))
    }

    pub fn print(
        pool: &DbPool,
        cfg: &Config,
        threshold: GapThreshold,
        today: NaiveDate,
    ) -> AppResult<()> {
        let plan = Self::plan(pool, threshold, today)?;

        header(format!("Reference requests (gaps {})", threshold.label()));

        if plan.entries.is_empty() {
            info("No complete employment intervals recorded yet.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 4),
            Column::new("Employer", 28),
            Column::new("Start", 12),
            Column::new("End", 12),
            Column::new("Reference", 10),
            Column::new("Why", 40),
        ]);

        for e in &plan.entries {
            let end = if e.is_current {
                "current".to_string()
            } else {
                fmt_date(e.end_date, &cfg.date_format)
            };
            let (flag, why) = if e.requires_reference() {
                let why: Vec<&str> = e.reasons.iter().map(|r| r.as_str()).collect();
                (format!("{MAGENTA}required{RESET}"), why.join(", "))
            } else {
                (format!("{GREY}no{RESET}"), String::new())
            };

            table.add_row(vec![
                e.interval_id.to_string(),
                e.employer.clone(),
                fmt_date(e.start_date, &cfg.date_format),
                end,
                flag,
                why,
            ]);
        }

        print!("{}", table.render());

        let required = plan.required().count();
        println!();
        success(format!(
            "{} reference request(s) needed; {} gap(s) at this threshold.",
            required,
            plan.gaps.len()
        ));

        Ok(())
    }
}
