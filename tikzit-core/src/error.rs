//! Error types for settings persistence.
//!
//! A missing key or an uncoercible value is not an error anywhere in this
//! crate; those resolve to the caller's default. Errors only arise from the
//! backing file itself, and callers absorb them best-effort.

use thiserror::Error;

/// Errors from loading or persisting the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;
