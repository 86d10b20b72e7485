//! Unified application error type.
//! All modules (store, core, cli) return AppError to keep the error
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
    // Spreadsheet store
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Spreadsheet service error ({status}): {message}")]
    SheetsApi { status: u16, message: String },

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Cannot sign service account assertion: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Invalid edit: {0}")]
    InvalidEdit(String),

    // ---------------------------
    // Session errors
    // ---------------------------
    #[error("Row {0} does not exist")]
    InvalidRow(usize),

    #[error("Column '{0}' is read-only")]
    ReadOnlyColumn(String),

    #[error("Access denied")]
    AccessDenied,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
