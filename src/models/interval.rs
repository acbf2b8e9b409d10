use chrono::{Local, NaiveDate};
use serde::Serialize;

/// One employment period as entered by the applicant.
///
/// Dates are optional at this level: the history form accepts half-filled
/// rows, and the gap detector simply ignores them until they are complete.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmploymentInterval {
    pub id: i64,                       // ⇔ intervals.id (0 = not stored yet)
    pub employer: String,              // ⇔ intervals.employer (free text)
    pub start_date: Option<NaiveDate>, // ⇔ intervals.start_date (TEXT "YYYY-MM-DD")
    pub end_date: Option<NaiveDate>,   // ⇔ intervals.end_date (TEXT, nullable)
    pub is_current: bool,              // ⇔ intervals.is_current (INT 0/1)
    pub created_at: String,            // ⇔ intervals.created_at (TEXT, ISO8601)
}

impl EmploymentInterval {
    /// Build an interval that has not been persisted yet (`id = 0`).
    pub fn new(
        employer: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        is_current: bool,
    ) -> Self {
        Self {
            id: 0,
            employer: employer.trim().to_string(),
            start_date,
            end_date,
            is_current,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// An interval takes part in gap analysis only with a start date and
    /// either an end date or the current flag.
    pub fn is_valid(&self) -> bool {
        self.start_date.is_some() && (self.end_date.is_some() || self.is_current)
    }

    /// End date used for analysis. `is_current` always wins over a stored end.
    pub fn effective_end(&self, today: NaiveDate) -> Option<NaiveDate> {
        if self.is_current {
            Some(today)
        } else {
            self.end_date
        }
    }

    /// True when the interval shares at least one day with `[from, to]`.
    /// Without an end, only the start date is considered.
    pub fn touches(&self, from: NaiveDate, to: NaiveDate, today: NaiveDate) -> bool {
        match (self.start_date, self.effective_end(today)) {
            (Some(s), Some(e)) => s <= to && e >= from,
            (Some(s), None) => s >= from && s <= to,
            _ => false,
        }
    }

    pub fn start_str(&self) -> String {
        fmt_opt_date(self.start_date)
    }

    pub fn end_str(&self) -> String {
        if self.is_current {
            "current".to_string()
        } else {
            fmt_opt_date(self.end_date)
        }
    }
}

fn fmt_opt_date(d: Option<NaiveDate>) -> String {
    d.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "--".to_string())
}
