// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Parse `--range` into inclusive bounds.
///
/// Accepted forms, single or as `start:end` of the same shape:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    let (from, to) = match r.split_once(':') {
        Some((a, b)) => {
            let (a, b) = (a.trim(), b.trim());
            if a.len() != b.len() {
                return Err(AppError::InvalidDate(format!(
                    "{r}: start and end must have the same format"
                )));
            }
            (period_bounds(a)?.0, period_bounds(b)?.1)
        }
        None => period_bounds(r)?,
    };

    if from > to {
        return Err(AppError::InvalidDate(format!("{r}: range start after end")));
    }

    Ok((from, to))
}

/// First and last day of a year, a month or a single day.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let bad = || AppError::InvalidDate(p.to_string());

    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| bad())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(bad)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(bad)?;
            Ok((first, last))
        }
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").map_err(|_| bad())?;
            Ok((first, last_day_of_month(first).ok_or_else(bad)?))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| bad())?;
            Ok((d, d))
        }
        _ => Err(bad()),
    }
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn month_range_ends_on_last_day() {
        assert_eq!(parse_range("2024-02").unwrap(), (d("2024-02-01"), d("2024-02-29")));
        assert_eq!(parse_range("2023-12").unwrap(), (d("2023-12-01"), d("2023-12-31")));
    }

    #[test]
    fn span_of_years() {
        assert_eq!(parse_range("2019:2021").unwrap(), (d("2019-01-01"), d("2021-12-31")));
    }

    #[test]
    fn rejects_mixed_or_reversed() {
        assert!(parse_range("2019:2021-01").is_err());
        assert!(parse_range("2021:2019").is_err());
        assert!(parse_range("20-1").is_err());
    }
}
