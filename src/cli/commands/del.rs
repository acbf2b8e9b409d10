use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_interval;
use crate::errors::AppResult;
use crate::ui::messages::info;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        // fail early on a wrong id, before asking anything
        let iv = load_interval(&pool.conn, *id)?;

        let prompt = format!(
            "Delete interval #{} ({}, {} → {})? Explanations attached to it are kept by date range only.",
            id,
            iv.employer,
            iv.start_str(),
            iv.end_str()
        );

        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        DeleteLogic::apply(&mut pool, cfg, *id, today)?;
    }

    Ok(())
}
