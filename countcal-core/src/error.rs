//! Error types for countcal.

use thiserror::Error;

/// Errors that can occur in countcal operations.
#[derive(Error, Debug)]
pub enum CountError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Not a valid url: {0}")]
    InvalidUrl(String),

    #[error("Invalid date '{value}' for '{key}'. Expected YYYY-MM-DD")]
    InvalidDate { key: char, value: String },

    #[error("Invalid display settings: {0}")]
    InvalidDisplay(String),

    #[error("Not a share link: none of s, e, t or d is set")]
    NotAShareLink,

    #[error("Document '{0}' is missing from local storage")]
    DocumentMissing(String),

    #[error("Settings are read-only while viewing a shared link. Claim or clear it first")]
    SettingsLocked,

    #[error("Could not lock document: {0}")]
    Lock(String),
}

/// Result type alias for countcal operations.
pub type CountResult<T> = Result<T, CountError>;
