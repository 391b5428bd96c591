//! Custom error types for resplit
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for resplit operations
#[derive(Error, Debug)]
pub enum ResplitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Item CSV import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Settlement export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A participant index referenced a participant that does not exist.
    ///
    /// Indicates a caller/model mismatch rather than bad user data, so the
    /// engine fails fast instead of silently clamping the index.
    #[error("Participant index {index} out of range (have {count} participants)")]
    ParticipantOutOfRange { index: u8, count: u8 },
}

impl ResplitError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a participant range error
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::ParticipantOutOfRange { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ResplitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ResplitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ResplitError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for resplit operations
pub type ResplitResult<T> = Result<T, ResplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ResplitError::Config("missing settings file".into());
        assert_eq!(err.to_string(), "Configuration error: missing settings file");
    }

    #[test]
    fn test_out_of_range_error() {
        let err = ResplitError::ParticipantOutOfRange { index: 3, count: 2 };
        assert_eq!(
            err.to_string(),
            "Participant index 3 out of range (have 2 participants)"
        );
        assert!(err.is_out_of_range());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ResplitError = io_err.into();
        assert!(matches!(err, ResplitError::Io(_)));
    }
}
