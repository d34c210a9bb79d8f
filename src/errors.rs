//! Unified application error type.
//! All modules (store, repos, core, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

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

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Record store
    // ---------------------------
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corrupt record under '{key}': {reason}")]
    CorruptRecord { key: String, reason: String },

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid cardio kind: {0}")]
    InvalidCardioKind(String),

    #[error("Invalid mood: {0}")]
    InvalidMood(String),

    #[error("Invalid score (expected 0-10): {0}")]
    InvalidScore(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No active session for workout '{0}'")]
    NoActiveSession(String),

    #[error("A session for workout '{0}' is already in progress")]
    SessionInProgress(String),

    #[error("No records found for period {0}")]
    NoRecordsForPeriod(String),

    #[error("Incomplete check-in: {0}")]
    IncompleteCheckin(String),

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
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
