//! Employment gap detection.
//!
//! Intervals are filtered, resolved against `today`, sorted by start date and
//! scanned in order. Every uncovered range of at least the threshold length
//! is reported as a [`Gap`]. The function is pure: same input, same gaps.

use crate::models::gap::Gap;
use crate::models::interval::EmploymentInterval;
use crate::models::threshold::GapThreshold;
use crate::utils::date::Clock;
use chrono::{Days, NaiveDate};

/// An interval ready for analysis: original position plus effective end.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Span {
    pub index: usize,
    pub id: i64,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub is_current: bool,
}

/// Drop incomplete intervals, resolve `is_current`, sort by start date.
///
/// `sort_by_key` is stable, so intervals starting on the same day keep the
/// caller's order.
pub(crate) fn normalize(intervals: &[EmploymentInterval], today: NaiveDate) -> Vec<Span> {
    let mut spans: Vec<Span> = intervals
        .iter()
        .enumerate()
        .filter(|(_, iv)| iv.is_valid())
        .filter_map(|(index, iv)| {
            Some(Span {
                index,
                id: iv.id,
                start: iv.start_date?,
                end: iv.effective_end(today)?,
                is_current: iv.is_current,
            })
        })
        .collect();

    spans.sort_by_key(|s| s.start);
    spans
}

/// Uncovered range between `covered` and `next`, as (first day, last day, days).
fn uncovered_between(covered: &Span, next: &Span) -> Option<(NaiveDate, NaiveDate, i64)> {
    let first = covered.end.checked_add_days(Days::new(1))?;

    // touching or overlapping
    if next.start <= first {
        return None;
    }

    let last = next.start.pred_opt()?;
    Some((first, last, (next.start - first).num_days()))
}

/// Detect gaps of at least `threshold` days between employment intervals.
///
/// The scan keeps a coverage horizon: the span reaching furthest so far.
/// Each candidate gap is measured from that horizon, so an interval nested
/// inside a longer one never opens a gap the longer one covers. A current
/// position covers all time after its start and ends the scan.
pub fn detect_gaps(
    intervals: &[EmploymentInterval],
    today: NaiveDate,
    threshold: GapThreshold,
) -> Vec<Gap> {
    let spans = normalize(intervals, today);
    if spans.len() < 2 {
        return Vec::new();
    }

    let min_days = threshold.min_days();
    let mut gaps = Vec::new();
    let mut horizon = spans[0];

    for next in &spans[1..] {
        if horizon.is_current {
            break;
        }

        if let Some((first, last, days)) = uncovered_between(&horizon, next)
            && days >= min_days
        {
            gaps.push(Gap {
                start_date: first,
                end_date: last,
                days,
                preceding_index: horizon.index,
                preceding_id: horizon.id,
                following_index: next.index,
                following_id: next.id,
            });
        }

        if next.is_current || next.end > horizon.end {
            horizon = *next;
        }
    }

    gaps
}

/// Same as [`detect_gaps`], resolving "today" from the given clock once.
pub fn detect_gaps_with_clock(
    intervals: &[EmploymentInterval],
    clock: &dyn Clock,
    threshold: GapThreshold,
) -> Vec<Gap> {
    detect_gaps(intervals, clock.today(), threshold)
}
