use crate::core::calculator::{explanations, gaps, references};
use crate::models::explanation::GapExplanation;
use crate::models::gap_report::GapReport;
use crate::models::interval::EmploymentInterval;
use crate::models::reference::ReferencePlan;
use crate::models::threshold::GapThreshold;
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// Detect gaps and attach the stored explanations to them.
    pub fn build_gap_report(
        intervals: &[EmploymentInterval],
        explanations: &[GapExplanation],
        today: NaiveDate,
        threshold: GapThreshold,
    ) -> GapReport {
        let detected = gaps::detect_gaps(intervals, today, threshold);
        explanations::match_explanations(&detected, explanations)
    }

    pub fn build_reference_plan(
        intervals: &[EmploymentInterval],
        today: NaiveDate,
        threshold: GapThreshold,
    ) -> ReferencePlan {
        references::plan_references(intervals, today, threshold)
    }
}
