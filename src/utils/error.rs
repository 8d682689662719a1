//! Error types for the entry store and its backends.

use thiserror::Error;

/// Errors surfaced by the store. Corrupt or unreadable stored data is
/// recovered inside the store and never shows up here; only failures to
/// persist do.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_prefixes() {
        let err = StoreError::config("unknown backend 'redis'");
        assert_eq!(err.to_string(), "Configuration error: unknown backend 'redis'");

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: StoreError = io.into();
        assert!(err.to_string().starts_with("I/O error:"));
    }
}
