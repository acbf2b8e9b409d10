use crate::models::gap::Gap;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReferenceReason {
    /// Current position, or the latest one when none is current.
    MostRecent,
    /// Employment ended right before a regulatory gap.
    PrecedesGap,
    /// Employment started right after a regulatory gap.
    FollowsGap,
}

impl ReferenceReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceReason::MostRecent => "most recent employer",
            ReferenceReason::PrecedesGap => "before gap",
            ReferenceReason::FollowsGap => "after gap",
        }
    }
}

/// One valid interval in the reference plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceEntry {
    pub interval_index: usize,
    pub interval_id: i64,
    pub employer: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate, // effective end (today for current positions)
    pub is_current: bool,
    pub reasons: Vec<ReferenceReason>,
}

impl ReferenceEntry {
    pub fn requires_reference(&self) -> bool {
        !self.reasons.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferencePlan {
    pub entries: Vec<ReferenceEntry>,
    pub gaps: Vec<Gap>,
}

impl ReferencePlan {
    pub fn required(&self) -> impl Iterator<Item = &ReferenceEntry> {
        self.entries.iter().filter(|e| e.requires_reference())
    }
}
