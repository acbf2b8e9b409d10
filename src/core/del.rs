use crate::config::Config;
use crate::core::report::GapLogic;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_interval, load_interval};
use crate::errors::AppResult;
use crate::ui::messages::info;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(pool: &mut DbPool, cfg: &Config, id: i64, today: NaiveDate) -> AppResult<()> {
        let iv = load_interval(&pool.conn, id)?;

        pool.with_transaction(|tx| delete_interval(tx, id))?;

        ttlog_soft(
            &pool.conn,
            "del",
            &id.to_string(),
            &format!("{} {} → {}", iv.employer, iv.start_str(), iv.end_str()),
        );

        info(format!("Deleted interval #{} ({})", id, iv.employer));

        GapLogic::notify_after_change(pool, cfg, today)
    }
}
