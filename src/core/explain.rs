use crate::core::report::GapLogic;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_explanation, insert_explanation, update_explanation};
use crate::errors::{AppError, AppResult};
use crate::models::explanation::GapExplanation;
use crate::models::threshold::GapThreshold;
use crate::ui::messages::{info, success};
use chrono::NaiveDate;

/// Attach, remove and prune gap explanations.
pub struct ExplainLogic;

impl ExplainLogic {
    /// Explain gap number `gap_no` (1-based, as listed by `gaps` with the
    /// same threshold). An existing explanation is rewritten and its range
    /// reconfirmed to the current gap.
    pub fn explain(
        pool: &mut DbPool,
        gap_no: usize,
        reason: &str,
        threshold: GapThreshold,
        today: NaiveDate,
    ) -> AppResult<i64> {
        if reason.trim().is_empty() {
            return Err(AppError::Explanation("reason must not be empty".into()));
        }

        let (_, report) = GapLogic::load(pool, threshold, today)?;

        let status = gap_no
            .checked_sub(1)
            .and_then(|i| report.gaps.get(i))
            .ok_or(AppError::InvalidGap(gap_no))?;

        let gap = &status.gap;
        let key = (gap.preceding_id != 0).then_some(gap.preceding_id);

        let id = match &status.explanation {
            Some(existing) => {
                let mut ex = existing.clone();
                ex.interval_id = key.or(ex.interval_id);
                ex.start_date = gap.start_date;
                ex.end_date = gap.end_date;
                ex.reason = reason.trim().to_string();
                update_explanation(&pool.conn, &ex)?;
                ex.id
            }
            None => {
                let ex = GapExplanation::new(key, gap.start_date, gap.end_date, reason);
                insert_explanation(&pool.conn, &ex)?
            }
        };

        ttlog_soft(
            &pool.conn,
            "explain",
            &format!("{} → {}", gap.start_str(), gap.end_str()),
            reason.trim(),
        );

        success(format!(
            "Gap #{} ({} → {}, {} days) explained.",
            gap_no,
            gap.start_str(),
            gap.end_str(),
            gap.days
        ));
        Ok(id)
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        delete_explanation(&pool.conn, id)?;
        ttlog_soft(&pool.conn, "unexplain", &id.to_string(), "Explanation deleted");
        success(format!("Explanation #{} deleted.", id));
        Ok(())
    }

    /// Delete explanations matching no gap at all.
    ///
    /// Uses the finest threshold, so explanations of short gaps are kept
    /// even if they are hidden from the regulatory view.
    pub fn prune(pool: &mut DbPool, today: NaiveDate) -> AppResult<usize> {
        let (_, report) = GapLogic::load(pool, GapThreshold::Any, today)?;

        if report.orphaned.is_empty() {
            info("No orphaned explanations.");
            return Ok(0);
        }

        let orphaned = report.orphaned;
        pool.with_transaction(|tx| -> AppResult<()> {
            for ex in &orphaned {
                delete_explanation(tx, ex.id)?;
            }
            Ok(())
        })?;

        ttlog_soft(
            &pool.conn,
            "prune",
            "",
            &format!("Removed {} orphaned explanation(s)", orphaned.len()),
        );

        success(format!("Removed {} orphaned explanation(s).", orphaned.len()));
        Ok(orphaned.len())
    }
}
