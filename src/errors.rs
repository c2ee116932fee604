//! Unified application error type.
//! All modules (store, core, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Record log parsing
    // ---------------------------
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unrecognized record line: {0}")]
    InvalidRecord(String),

    // ---------------------------
    // Timer state
    // ---------------------------
    #[error("Timer is already running")]
    AlreadyRunning,

    #[error("Timer is not running")]
    NotRunning,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
