use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, IntervalInput};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_optional_date;
use chrono::NaiveDate;

/// Handle the `add` command (insert, or edit with --edit --id)
pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Add {
        name,
        employer,
        start,
        end,
        current,
        not_current,
        id,
        edit,
    } = cmd
    {
        //
        // 1. Employer: --employer wins over the positional name
        //
        let employer = employer
            .as_ref()
            .or(name.as_ref())
            .map(|s| s.trim().to_string());

        if !*edit && employer.is_none() {
            return Err(AppError::InvalidInterval(
                "missing employer name (gapcheck add <EMPLOYER> --start YYYY-MM-DD)".into(),
            ));
        }

        //
        // 2. Dates
        //
        let start = parse_optional_date(start.as_ref())?;
        let end = parse_optional_date(end.as_ref())?;

        //
        // 3. Current flag: only touched when explicitly given
        //
        let current = if *current {
            Some(true)
        } else if *not_current {
            Some(false)
        } else {
            None
        };

        let input = IntervalInput {
            employer,
            start,
            end,
            current,
        };

        let edit_id = if *edit { *id } else { None };

        let mut pool = DbPool::new(&cfg.database)?;
        AddLogic::apply(&mut pool, cfg, input, edit_id, today)?;
    }

    Ok(())
}
