use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, sql: &str) -> rusqlite::Result<i64> {
    pool.conn.query_row(sql, [], |row| row.get(0))
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ROW COUNTS
    //
    let intervals = count(pool, "SELECT COUNT(*) FROM intervals")?;
    let current = count(pool, "SELECT COUNT(*) FROM intervals WHERE is_current = 1")?;
    let explanations = count(pool, "SELECT COUNT(*) FROM gap_explanations")?;
    let unkeyed = count(
        pool,
        "SELECT COUNT(*) FROM gap_explanations WHERE interval_id IS NULL",
    )?;

    println!(
        "{}• Intervals:{} {}{}{} ({} current)",
        CYAN, RESET, GREEN, intervals, RESET, current
    );
    println!(
        "{}• Gap explanations:{} {}{}{} ({} range-keyed)",
        CYAN, RESET, GREEN, explanations, RESET, unkeyed
    );

    //
    // 3) HISTORY SPAN
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT MIN(start_date) FROM intervals WHERE start_date IS NOT NULL",
            [],
            |row| row.get(0),
        )
        .optional()?
        .flatten();

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT MAX(end_date) FROM intervals WHERE end_date IS NOT NULL",
            [],
            |row| row.get(0),
        )
        .optional()?
        .flatten();

    let last = if current > 0 {
        Some("current".to_string())
    } else {
        last
    };

    println!("{}• History span:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}
