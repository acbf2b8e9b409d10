use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Source of "today" for resolving current positions.
///
/// Commands resolve it once and pass the date down, so a whole command run
/// sees a single consistent day.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock, local timezone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        today()
    }
}

/// Pinned date (`--today` on the command line, tests).
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Pick the clock for a command: pinned if `--today` was given.
pub fn resolve_clock(today_arg: &Option<String>) -> AppResult<Box<dyn Clock>> {
    match today_arg {
        Some(s) => Ok(Box::new(FixedClock(parse_required(s)?))),
        None => Ok(Box::new(SystemClock)),
    }
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_required(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn parse_optional_date(input: Option<&String>) -> AppResult<Option<NaiveDate>> {
    input.map(|s| parse_required(s)).transpose()
}

/// Inclusive length of a date range in days.
pub fn span_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

pub fn month_name(mm: &str) -> &'static str {
    match mm {
        "01" => "January",
        "02" => "February",
        "03" => "March",
        "04" => "April",
        "05" => "May",
        "06" => "June",
        "07" => "July",
        "08" => "August",
        "09" => "September",
        "10" => "October",
        "11" => "November",
        "12" => "December",
        _ => "",
    }
}
