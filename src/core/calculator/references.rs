//! Decide which employers need a reference request.
//!
//! The reference check works on the finalized history with the regulatory
//! threshold, independently from the live gap display.

use crate::core::calculator::gaps::{detect_gaps, normalize};
use crate::models::interval::EmploymentInterval;
use crate::models::reference::{ReferenceEntry, ReferencePlan, ReferenceReason};
use crate::models::threshold::GapThreshold;
use chrono::NaiveDate;

/// Build the reference plan.
///
/// A reference is required from every current employer (or, with no current
/// position, from the one with the latest end date) and from every employer
/// bounding a gap that meets `threshold`.
pub fn plan_references(
    intervals: &[EmploymentInterval],
    today: NaiveDate,
    threshold: GapThreshold,
) -> ReferencePlan {
    let spans = normalize(intervals, today);
    let gaps = detect_gaps(intervals, today, threshold);

    let has_current = spans.iter().any(|s| s.is_current);

    // latest end wins; on ties the later one in chronological order
    let most_recent = spans
        .iter()
        .enumerate()
        .max_by_key(|(pos, s)| (s.end, *pos))
        .map(|(_, s)| s.index);

    let entries = spans
        .iter()
        .map(|s| {
            let mut reasons = Vec::new();

            let recent = if has_current {
                s.is_current
            } else {
                Some(s.index) == most_recent
            };
            if recent {
                reasons.push(ReferenceReason::MostRecent);
            }
            if gaps.iter().any(|g| g.preceding_index == s.index) {
                reasons.push(ReferenceReason::PrecedesGap);
            }
            if gaps.iter().any(|g| g.following_index == s.index) {
                reasons.push(ReferenceReason::FollowsGap);
            }

            ReferenceEntry {
                interval_index: s.index,
                interval_id: s.id,
                employer: intervals[s.index].employer.clone(),
                start_date: s.start,
                end_date: s.end,
                is_current: s.is_current,
                reasons,
            }
        })
        .collect();

    ReferencePlan { entries, gaps }
}
