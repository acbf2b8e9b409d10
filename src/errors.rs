//! Unified application error type.
//! All modules (db, core, cli, export) return AppError so that the binary
//! can report every failure the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing / input errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid employment interval: {0}")]
    InvalidInterval(String),

    #[error("Invalid gap threshold: {0}")]
    InvalidThreshold(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No employment interval with id {0}")]
    IntervalNotFound(i64),

    #[error("No gap #{0} in the current gap list")]
    InvalidGap(usize),

    #[error("No gap explanation with id {0}")]
    ExplanationNotFound(i64),

    #[error("Gap explanation error: {0}")]
    Explanation(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
