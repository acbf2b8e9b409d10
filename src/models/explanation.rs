use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Applicant-supplied reason for a gap.
///
/// New explanations are keyed by the interval preceding the gap plus the gap
/// start date, so edits to other intervals (including the one after the gap)
/// do not orphan them. Rows written before that key existed, or whose interval
/// was deleted, carry `interval_id = None` and match by exact date range.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GapExplanation {
    pub id: i64,                  // ⇔ gap_explanations.id
    pub interval_id: Option<i64>, // ⇔ gap_explanations.interval_id (nullable)
    pub start_date: NaiveDate,    // ⇔ gap_explanations.start_date
    pub end_date: NaiveDate,      // ⇔ gap_explanations.end_date
    pub reason: String,           // ⇔ gap_explanations.reason
    pub created_at: String,       // ⇔ gap_explanations.created_at
}

impl GapExplanation {
    pub fn new(
        interval_id: Option<i64>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: &str,
    ) -> Self {
        Self {
            id: 0,
            interval_id,
            start_date,
            end_date,
            reason: reason.trim().to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Only a non-blank reason counts as an explanation.
    pub fn has_reason(&self) -> bool {
        !self.reason.trim().is_empty()
    }

    pub fn range_str(&self) -> String {
        format!(
            "{} → {}",
            self.start_date.format("%Y-%m-%d"),
            self.end_date.format("%Y-%m-%d")
        )
    }
}
