//! Error types for Tally

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Encryption error: {0}")]
    Encryption(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed month '{0}' (expected YYYY-MM)")]
    MalformedMonth(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Whether the store could not be reached at all (as opposed to a failed query)
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_) | Self::Pool(_))
    }

    /// Whether the error was caused by bad caller input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::MalformedMonth(_) | Self::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
