use chrono::NaiveDate;
use serde::Serialize;

/// A detected uncovered date range between two employment intervals.
///
/// Gaps are never stored: they are recomputed from the interval set every
/// time it changes. Indices refer to the caller-supplied ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gap {
    pub start_date: NaiveDate, // first uncovered day
    pub end_date: NaiveDate,   // last uncovered day
    pub days: i64,             // end_date - start_date + 1

    pub preceding_index: usize,
    pub preceding_id: i64,
    pub following_index: usize,
    pub following_id: i64,
}

impl Gap {
    pub fn start_str(&self) -> String {
        self.start_date.format("%Y-%m-%d").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_date.format("%Y-%m-%d").to_string()
    }

    /// True when the gap touches the inclusive `[from, to]` range.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start_date <= to && self.end_date >= from
    }
}
