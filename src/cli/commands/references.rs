use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reference_check::ReferenceLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::References = cmd {
        let pool = DbPool::new(&cfg.database)?;
        ReferenceLogic::print(&pool, cfg, cfg.reference_threshold(), today)?;
    }
    Ok(())
}
