use crate::cli::commands::{ask_confirmation, resolve_threshold};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::explain::ExplainLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Explain {
        gap,
        reason,
        threshold,
        regulatory,
        del,
        id,
        prune,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *del {
            let Some(id) = id else {
                return Err(AppError::Explanation("--del requires --id".into()));
            };
            if !ask_confirmation(&format!("Delete explanation #{}?", id)) {
                info("Operation cancelled.");
                return Ok(());
            }
            return ExplainLogic::delete(&mut pool, *id);
        }

        if *prune {
            ExplainLogic::prune(&mut pool, today)?;
            return Ok(());
        }

        match (gap, reason) {
            (Some(n), Some(r)) => {
                let threshold = resolve_threshold(threshold, *regulatory, cfg)?;
                ExplainLogic::explain(&mut pool, *n, r, threshold, today)?;
            }
            (Some(_), None) => {
                return Err(AppError::Explanation("--gap requires --reason".into()));
            }
            _ => {
                return Err(AppError::Explanation(
                    "nothing to do: use --gap N --reason TEXT, --del --id N or --prune".into(),
                ));
            }
        }
    }

    Ok(())
}
