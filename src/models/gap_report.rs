use crate::models::explanation::GapExplanation;
use crate::models::gap::Gap;
use serde::Serialize;

/// A detected gap together with the explanation matched to it, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GapStatus {
    pub gap: Gap,
    pub explanation: Option<GapExplanation>,
    /// The matched explanation was written for a different end date
    /// (the interval after the gap was edited since).
    pub range_changed: bool,
}

impl GapStatus {
    pub fn is_explained(&self) -> bool {
        self.explanation.is_some()
    }
}

/// Result of matching stored explanations against freshly detected gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GapReport {
    pub gaps: Vec<GapStatus>,
    /// Explanations that no longer correspond to any detected gap.
    pub orphaned: Vec<GapExplanation>,
}

impl GapReport {
    pub fn unexplained(&self) -> impl Iterator<Item = &GapStatus> {
        self.gaps.iter().filter(|g| !g.is_explained())
    }

    pub fn unexplained_count(&self) -> usize {
        self.unexplained().count()
    }

    pub fn total_gap_days(&self) -> i64 {
        self.gaps.iter().map(|g| g.gap.days).sum()
    }
}
