//! Error types for the contact directory.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by record and directory operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No stored phone matched the one to edit
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// No record is stored under the given name
    #[error("Record not found: {0}")]
    RecordNotFound(String),
}

/// Errors that can occur while loading or saving the directory.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not hold a valid snapshot
    #[error("Corrupt address book file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The directory could not be encoded
    #[error("Failed to encode address book: {0}")]
    Encode(#[from] serde_json::Error),

    /// The file was written by an incompatible format version
    #[error("Unsupported address book format version {found} (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DirectoryError::RecordNotFound("Alice".to_string());
        assert_eq!(err.to_string(), "Record not found: Alice");

        let err = DirectoryError::PhoneNotFound("0000000000".to_string());
        assert_eq!(err.to_string(), "Phone number not found: 0000000000");

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for BIRTHDAY_WINDOW_DAYS: Must be a number"
        );
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: DirectoryError = ValidationError::InvalidPhone("12".to_string()).into();
        assert_eq!(
            err.to_string(),
            ValidationError::InvalidPhone("12".to_string()).to_string()
        );
    }

    #[test]
    fn test_storage_error_variants() {
        let err = StorageError::UnsupportedVersion {
            found: 7,
            supported: 1,
        };
        assert!(err.to_string().contains('7'));
        assert!(err.to_string().contains('1'));

        let err = StorageError::Io {
            path: PathBuf::from("book.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("book.json"));
        assert!(err.to_string().contains("denied"));
    }
}
