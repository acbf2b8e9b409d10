use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::List = cmd {
        let pool = DbPool::new(&cfg.database)?;
        ListLogic::print(&pool, cfg, today)?;
    }
    Ok(())
}
