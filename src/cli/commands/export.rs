use crate::cli::commands::resolve_threshold;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::logic::ExportRequest;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        gaps,
        regulatory,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let request = ExportRequest {
            format: *format,
            file,
            range,
            gaps: *gaps,
            force: *force,
            threshold: resolve_threshold(&None, *regulatory, cfg)?,
            today,
        };
        ExportLogic::export(&pool, cfg, request)?;
    }
    Ok(())
}
