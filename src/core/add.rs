use crate::config::Config;
use crate::core::report::GapLogic;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_interval, load_interval, update_interval};
use crate::errors::{AppError, AppResult};
use crate::models::interval::EmploymentInterval;
use crate::ui::messages::{success, warning};
use chrono::NaiveDate;

/// Fields supplied on the command line; `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct IntervalInput {
    pub employer: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub current: Option<bool>,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

fn validate(iv: &EmploymentInterval) -> AppResult<()> {
    if iv.employer.trim().is_empty() {
        return Err(AppError::InvalidInterval("employer must not be empty".into()));
    }

    if let (Some(start), Some(end)) = (iv.start_date, iv.end_date)
        && !iv.is_current
        && end < start
    {
        return Err(AppError::InvalidInterval(format!(
            "end date {} is before start date {}",
            end, start
        )));
    }

    Ok(())
}

fn warn_incomplete(iv: &EmploymentInterval) {
    if iv.is_current && iv.end_date.is_some() {
        warning("Interval marked as current: its end date is ignored by gap analysis.");
    }
    if !iv.is_valid() {
        warning("Interval is incomplete (no end date and not current): excluded from gap analysis.");
    }
}

impl AddLogic {
    /// Insert a new interval, or edit `edit_id` with the given fields.
    ///
    /// After saving, gaps are recomputed with the live threshold and any
    /// unexplained ones are reported. Returns the interval id.
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        input: IntervalInput,
        edit_id: Option<i64>,
        today: NaiveDate,
    ) -> AppResult<i64> {
        let id = match edit_id {
            Some(id) => Self::edit(pool, input, id)?,
            None => Self::insert(pool, input)?,
        };

        GapLogic::notify_after_change(pool, cfg, today)?;
        Ok(id)
    }

    fn insert(pool: &mut DbPool, input: IntervalInput) -> AppResult<i64> {
        let employer = input
            .employer
            .ok_or_else(|| AppError::InvalidInterval("missing employer".into()))?;

        let start = input.start.ok_or_else(|| {
            AppError::InvalidInterval("missing --start date (YYYY-MM-DD)".into())
        })?;

        let iv = EmploymentInterval::new(
            &employer,
            Some(start),
            input.end,
            input.current.unwrap_or(false),
        );

        validate(&iv)?;
        warn_incomplete(&iv);

        let id = insert_interval(&pool.conn, &iv)?;

        ttlog_soft(
            &pool.conn,
            "add",
            &id.to_string(),
            &format!("{} {} → {}", iv.employer, iv.start_str(), iv.end_str()),
        );

        success(format!(
            "Added interval #{}: {} ({} → {}).",
            id,
            iv.employer,
            iv.start_str(),
            iv.end_str()
        ));
        Ok(id)
    }

    fn edit(pool: &mut DbPool, input: IntervalInput, id: i64) -> AppResult<i64> {
        let mut iv = load_interval(&pool.conn, id)?;
        let before = format!("{} → {}", iv.start_str(), iv.end_str());

        if let Some(employer) = input.employer {
            iv.employer = employer.trim().to_string();
        }
        if let Some(start) = input.start {
            iv.start_date = Some(start);
        }
        if let Some(end) = input.end {
            iv.end_date = Some(end);
        }
        if let Some(current) = input.current {
            iv.is_current = current;
        }

        validate(&iv)?;
        warn_incomplete(&iv);

        update_interval(&pool.conn, &iv)?;

        let after = format!("{} → {}", iv.start_str(), iv.end_str());
        ttlog_soft(
            &pool.conn,
            "edit",
            &id.to_string(),
            &format!("{}: {} ⇒ {}", iv.employer, before, after),
        );

        success(format!("✏️ Interval #{} updated: {} ({}).", id, iv.employer, after));
        Ok(id)
    }
}
