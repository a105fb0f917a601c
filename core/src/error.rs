//! Error types for the PaperCheck core.
//!
//! Every error here is local to a user action: the UI turns it into a
//! transient [`crate::Notice`] and nothing propagates further.
//!
//! - [`RejectReason`] - why a file was not admitted to the staging set
//! - [`UploadError`] - staging/removal/submission refused by the upload session
//! - [`SignupError`] - signup form validation
//! - [`GradingError`] - grading service boundary
//! - [`ConfigError`] - invalid configuration values

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// File Acceptance
// =============================================================================

/// Reason a candidate file was excluded from the staging set.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RejectReason {
    /// Declared MIME type is not one of the accepted types.
    #[error("Unsupported file type: {mime}")]
    UnsupportedType { mime: String },

    /// File exceeds the per-file size limit.
    #[error("File is too large: {size} bytes (max {max} bytes)")]
    TooLarge { size: u64, max: u64 },
}

// =============================================================================
// Upload Session
// =============================================================================

/// Actions refused by the upload session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Submit was invoked with an empty staging set.
    #[error("No files selected")]
    NoFilesSelected,

    /// A submission is already running; staged files are frozen.
    #[error("A submission is already in progress")]
    SubmissionInFlight,
}

// =============================================================================
// Signup
// =============================================================================

/// Signup form validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    /// A required field is blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Email address has no `@`.
    #[error("Invalid email address")]
    InvalidEmail,

    /// Password shorter than the minimum.
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    /// Password and confirmation differ.
    #[error("Passwords don't match")]
    PasswordMismatch,
}

// =============================================================================
// Grading Service
// =============================================================================

/// Errors from a [`crate::GradingBackend`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradingError {
    /// Nothing to grade.
    #[error("Submission batch is empty")]
    EmptyBatch,

    /// The ticket was never issued by this backend.
    #[error("Unknown grading job: {0}")]
    UnknownJob(String),
}

// =============================================================================
// Configuration
// =============================================================================

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Value could not be parsed.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    /// Value must be greater than zero.
    #[error("{key} must be greater than zero")]
    NonPositive { key: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for upload session operations.
pub type UploadResult<T> = Result<T, UploadError>;

/// Result type for signup validation.
pub type SignupResult<T> = Result<T, SignupError>;

/// Result type for grading operations.
pub type GradingServiceResult<T> = Result<T, GradingError>;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_reason_format() {
        let err = RejectReason::TooLarge {
            size: 12_000_000,
            max: 10_485_760,
        };
        let msg = err.to_string();
        assert!(msg.contains("12000000"));
        assert!(msg.contains("10485760"));

        let err = RejectReason::UnsupportedType {
            mime: "text/plain".into(),
        };
        assert!(err.to_string().contains("text/plain"));
    }

    #[test]
    fn test_config_error_names_key() {
        let err = ConfigError::InvalidValue {
            key: "PAPERCHECK_TICK_MS".into(),
            value: "fast".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("PAPERCHECK_TICK_MS"));
        assert!(msg.contains("fast"));
    }
}
