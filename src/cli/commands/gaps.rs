use crate::cli::commands::resolve_threshold;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::GapLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Gaps {
        threshold,
        regulatory,
        unexplained,
    } = cmd
    {
        let threshold = resolve_threshold(threshold, *regulatory, cfg)?;
        let pool = DbPool::new(&cfg.database)?;
        GapLogic::print(&pool, cfg, threshold, today, *unexplained)?;
    }
    Ok(())
}
