use crate::db::models::LogRow;
use crate::errors::{AppError, AppResult};
use crate::models::explanation::GapExplanation;
use crate::models::interval::EmploymentInterval;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn fmt_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

fn parse_db_date(idx: usize, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw.to_string())),
        )
    })
}

fn parse_db_opt_date(idx: usize, raw: Option<String>) -> Result<Option<NaiveDate>> {
    match raw {
        Some(s) if !s.trim().is_empty() => parse_db_date(idx, &s).map(Some),
        _ => Ok(None),
    }
}

// ---------------------------------------------------------------
// intervals
// ---------------------------------------------------------------

pub fn map_interval_row(row: &Row) -> Result<EmploymentInterval> {
    let start_raw: Option<String> = row.get("start_date")?;
    let end_raw: Option<String> = row.get("end_date")?;

    Ok(EmploymentInterval {
        id: row.get("id")?,
        employer: row.get("employer")?,
        start_date: parse_db_opt_date(2, start_raw)?,
        end_date: parse_db_opt_date(3, end_raw)?,
        is_current: row.get::<_, i32>("is_current")? == 1,
        created_at: row.get("created_at")?,
    })
}

/// All intervals in entry order (the caller-supplied ordering for the detector).
pub fn load_intervals(conn: &Connection) -> AppResult<Vec<EmploymentInterval>> {
    let mut stmt = conn.prepare(
        "SELECT id, employer, start_date, end_date, is_current, created_at
         FROM intervals
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_interval_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_interval(conn: &Connection, id: i64) -> AppResult<EmploymentInterval> {
    conn.query_row(
        "SELECT id, employer, start_date, end_date, is_current, created_at
         FROM intervals WHERE id = ?1",
        [id],
        map_interval_row,
    )
    .optional()?
    .ok_or(AppError::IntervalNotFound(id))
}

/// Insert a new interval and return its id.
pub fn insert_interval(conn: &Connection, iv: &EmploymentInterval) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO intervals (employer, start_date, end_date, is_current, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            iv.employer,
            iv.start_date.as_ref().map(fmt_date),
            iv.end_date.as_ref().map(fmt_date),
            if iv.is_current { 1 } else { 0 },
            iv.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_interval(conn: &Connection, iv: &EmploymentInterval) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE intervals
         SET employer = ?1, start_date = ?2, end_date = ?3, is_current = ?4
         WHERE id = ?5",
        params![
            iv.employer,
            iv.start_date.as_ref().map(fmt_date),
            iv.end_date.as_ref().map(fmt_date),
            if iv.is_current { 1 } else { 0 },
            iv.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::IntervalNotFound(iv.id));
    }
    Ok(())
}

/// Delete an interval. Explanations keyed to it fall back to date-range matching.
pub fn delete_interval(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute(
        "UPDATE gap_explanations SET interval_id = NULL WHERE interval_id = ?1",
        [id],
    )?;

    let changed = conn.execute("DELETE FROM intervals WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::IntervalNotFound(id));
    }
    Ok(())
}

// ---------------------------------------------------------------
// gap explanations
// ---------------------------------------------------------------

pub fn map_explanation_row(row: &Row) -> Result<GapExplanation> {
    let start_raw: String = row.get("start_date")?;
    let end_raw: String = row.get("end_date")?;

    Ok(GapExplanation {
        id: row.get("id")?,
        interval_id: row.get("interval_id")?,
        start_date: parse_db_date(2, &start_raw)?,
        end_date: parse_db_date(3, &end_raw)?,
        reason: row.get("reason")?,
        created_at: row.get("created_at")?,
    })
}

pub fn load_explanations(conn: &Connection) -> AppResult<Vec<GapExplanation>> {
    let mut stmt = conn.prepare(
        "SELECT id, interval_id, start_date, end_date, reason, created_at
         FROM gap_explanations
         ORDER BY start_date ASC, id ASC",
    )?;

    let rows = stmt.query_map([], map_explanation_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_explanation(conn: &Connection, ex: &GapExplanation) -> AppResult<i64> {
    if !ex.has_reason() {
        return Err(AppError::Explanation("reason must not be empty".into()));
    }

    conn.execute(
        "INSERT INTO gap_explanations (interval_id, start_date, end_date, reason, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            ex.interval_id,
            fmt_date(&ex.start_date),
            fmt_date(&ex.end_date),
            ex.reason,
            ex.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Rewrite reason and confirmed range of an existing explanation.
pub fn update_explanation(conn: &Connection, ex: &GapExplanation) -> AppResult<()> {
    if !ex.has_reason() {
        return Err(AppError::Explanation("reason must not be empty".into()));
    }

    let changed = conn.execute(
        "UPDATE gap_explanations
         SET interval_id = ?1, start_date = ?2, end_date = ?3, reason = ?4
         WHERE id = ?5",
        params![
            ex.interval_id,
            fmt_date(&ex.start_date),
            fmt_date(&ex.end_date),
            ex.reason,
            ex.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::ExplanationNotFound(ex.id));
    }
    Ok(())
}

pub fn delete_explanation(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM gap_explanations WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::ExplanationNotFound(id));
    }
    Ok(())
}

// ---------------------------------------------------------------
// internal log
// ---------------------------------------------------------------

pub fn load_log(conn: &Connection) -> AppResult<Vec<LogRow>> {
    let mut stmt =
        conn.prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(LogRow {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
