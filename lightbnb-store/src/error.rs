//! Error types for lightbnb-store
//!
//! Every store operation returns `Result<T, StoreError>`. An empty result is
//! `Ok(None)` or `Ok(vec![])`; a failed query is always an `Err`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::ValidationError;

/// Main error type for store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Query or connection failure reported by the database driver
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Input rejected before any query was issued
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration could not be resolved
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// Reading the configuration file failed
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create an I/O error tied to the file being read
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the database rejected a row because of a unique constraint,
    /// e.g. registering an email that is already taken.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Database(sqlx::Error::Database(db)) => db.is_unique_violation(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StoreError::config("port must be a number");
        assert_eq!(err.to_string(), "configuration error: port must be a number");

        let err: StoreError = ValidationError::Empty { field: "email" }.into();
        assert_eq!(err.to_string(), "invalid input: email cannot be empty");
    }

    #[test]
    fn io_error_keeps_path() {
        let err = StoreError::io(
            "/tmp/lightbnb.toml",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("/tmp/lightbnb.toml"));
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn row_not_found_is_not_unique_violation() {
        let err = StoreError::Database(sqlx::Error::RowNotFound);
        assert!(!err.is_unique_violation());
    }
}
