use crate::ui::messages::{success, warning};
use rusqlite::{Connection, Error, OptionalExtension, Result};

const V_INITIAL_SCHEMA: &str = "20260115_0001_initial_schema";
const V_KEY_EXPLANATIONS: &str = "20260301_0002_key_explanations_by_interval";

/// Ensure that the `log` table exists. Migration markers live there too.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn create_intervals_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS intervals (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            employer    TEXT NOT NULL,
            start_date  TEXT,
            end_date    TEXT,
            is_current  INTEGER NOT NULL DEFAULT 0 CHECK(is_current IN (0, 1)),
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_intervals_start ON intervals(start_date);
        "#,
    )?;
    Ok(())
}

fn create_explanations_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS gap_explanations (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            interval_id INTEGER REFERENCES intervals(id) ON DELETE SET NULL,
            start_date  TEXT NOT NULL,
            end_date    TEXT NOT NULL,
            reason      TEXT NOT NULL CHECK(length(trim(reason)) > 0),
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_gap_explanations_key
            ON gap_explanations(interval_id, start_date);
        "#,
    )?;
    Ok(())
}

/// Explanations used to be keyed by their date range only. Add the
/// `interval_id` key and backfill it with the interval that ends the day
/// before each explained gap, picking the earliest start among those ending
/// that day like the detector does. Rows with no such interval stay
/// range-keyed.
fn migrate_key_explanations_by_interval(conn: &Connection) -> Result<()> {
    if has_column(conn, "gap_explanations", "interval_id")? {
        return Ok(());
    }

    warning("Adding 'interval_id' key to gap_explanations...");

    conn.execute_batch(
        r#"
        BEGIN;

        ALTER TABLE gap_explanations
            ADD COLUMN interval_id INTEGER REFERENCES intervals(id) ON DELETE SET NULL;

        UPDATE gap_explanations
        SET interval_id = (
            SELECT i.id FROM intervals i
            WHERE i.is_current = 0
              AND i.start_date IS NOT NULL
              AND i.end_date = date(gap_explanations.start_date, '-1 day')
            ORDER BY i.start_date ASC, i.id ASC
            LIMIT 1
        )
        WHERE interval_id IS NULL;

        CREATE INDEX IF NOT EXISTS idx_gap_explanations_key
            ON gap_explanations(interval_id, start_date);

        COMMIT;
        "#,
    )?;

    let keyed: i64 = conn.query_row(
        "SELECT COUNT(*) FROM gap_explanations WHERE interval_id IS NOT NULL",
        [],
        |row| row.get(0),
    )?;
    success(format!("Keyed {} existing explanation(s) by interval.", keyed));

    Ok(())
}

fn io_err(stage: &str, e: impl std::fmt::Display) -> Error {
    Error::ToSqlConversionFailure(Box::new(std::io::Error::other(format!(
        "Backup failed ({stage}): {e}"
    ))))
}

fn backup_before_migration(conn: &Connection) -> Result<()> {
    use chrono::Local;
    use std::fs::{self, File};
    use std::io::Write;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let db_path: String = conn
        .query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
        .unwrap_or_default();

    if db_path.is_empty() {
        warning("Could not determine DB path — backup skipped.");
        return Ok(());
    }

    let db_file = std::path::Path::new(&db_path);
    let backup_path = db_file.with_file_name(format!(
        "{}-backup_db_pre_migration.zip",
        Local::now().format("%Y%m%d_%H%M%S")
    ));

    let file = File::create(&backup_path).map_err(|e| io_err("create", e))?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options)
        .map_err(|e| io_err("start_file", e))?;

    let content = fs::read(db_file).map_err(|e| io_err("read", e))?;
    zip.write_all(&content).map_err(|e| io_err("write_all", e))?;
    zip.finish().map_err(|e| io_err("finish", e))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by `db::initialize::init_db()` and `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    let intervals_exist = table_exists(conn, "intervals")?;
    let explanations_exist = table_exists(conn, "gap_explanations")?;

    // Pre-key schema: explanations keyed by date range only
    let legacy = explanations_exist && !has_column(conn, "gap_explanations", "interval_id")?;

    if legacy {
        warning("Legacy schema detected — creating safety backup before migration...");
        backup_before_migration(conn)?;
    }

    if !intervals_exist {
        create_intervals_table(conn)?;
        success("Created intervals table.");
    }

    if !explanations_exist {
        create_explanations_table(conn)?;
        success("Created gap_explanations table.");
    }

    if !is_applied(conn, V_INITIAL_SCHEMA)? {
        mark_applied(conn, V_INITIAL_SCHEMA, "Created intervals and gap_explanations")?;
    }

    if !is_applied(conn, V_KEY_EXPLANATIONS)? {
        migrate_key_explanations_by_interval(conn)?;
        mark_applied(
            conn,
            V_KEY_EXPLANATIONS,
            "Keyed gap explanations by preceding interval",
        )?;
        if legacy {
            success(format!("Migration applied: {}", V_KEY_EXPLANATIONS));
        }
    }

    Ok(())
}
