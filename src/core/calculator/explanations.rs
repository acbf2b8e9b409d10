//! Re-association of stored gap explanations with freshly detected gaps.

use crate::models::explanation::GapExplanation;
use crate::models::gap::Gap;
use crate::models::gap_report::{GapReport, GapStatus};

/// Keyed match: same preceding interval and same gap start.
fn is_keyed_match(gap: &Gap, ex: &GapExplanation) -> bool {
    gap.preceding_id != 0
        && ex.interval_id == Some(gap.preceding_id)
        && ex.start_date == gap.start_date
}

/// Range match: exact date range. Covers rows without an interval key and
/// keyed rows whose gap is now bounded by another interval ending the same
/// day.
fn is_range_match(gap: &Gap, ex: &GapExplanation) -> bool {
    ex.start_date == gap.start_date && ex.end_date == gap.end_date
}

/// Match every gap with at most one explanation.
///
/// All gaps get a keyed pass first, then an exact range pass. Explanations
/// with a blank reason never explain anything and end up in `orphaned`
/// together with the ones no gap claimed.
pub fn match_explanations(gaps: &[Gap], explanations: &[GapExplanation]) -> GapReport {
    let mut used = vec![false; explanations.len()];
    let mut found: Vec<Option<usize>> = vec![None; gaps.len()];

    let passes: [fn(&Gap, &GapExplanation) -> bool; 2] = [is_keyed_match, is_range_match];
    for pred in passes {
        for (slot, gap) in found.iter_mut().zip(gaps) {
            if slot.is_some() {
                continue;
            }
            let hit = explanations
                .iter()
                .enumerate()
                .find(|(i, ex)| !used[*i] && ex.has_reason() && pred(gap, ex))
                .map(|(i, _)| i);
            if let Some(i) = hit {
                used[i] = true;
                *slot = Some(i);
            }
        }
    }

    let statuses = gaps
        .iter()
        .zip(found)
        .map(|(gap, hit)| match hit {
            Some(i) => {
                let ex = explanations[i].clone();
                let range_changed = ex.end_date != gap.end_date;
                GapStatus {
                    gap: gap.clone(),
                    explanation: Some(ex),
                    range_changed,
                }
            }
            None => GapStatus {
                gap: gap.clone(),
                explanation: None,
                range_changed: false,
            },
        })
        .collect();

    let orphaned = explanations
        .iter()
        .zip(used)
        .filter(|(_, u)| !u)
        .map(|(ex, _)| ex.clone())
        .collect();

    GapReport {
        gaps: statuses,
        orphaned,
    }
}
