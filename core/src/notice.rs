//! Transient user-facing notices (toasts).
//!
//! Every user-level error ends up here; nothing is thrown past the view.

use serde::{Deserialize, Serialize};

use crate::error::{RejectReason, SignupError, UploadError};
use crate::upload::{format_megabytes, Rejection};

/// Notice severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl NoticeLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice-info",
            NoticeLevel::Success => "notice-success",
            NoticeLevel::Warning => "notice-warning",
            NoticeLevel::Error => "notice-error",
        }
    }
}

/// A short message with a title and a description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, description)
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, title, description)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, description)
    }

    /// Shown when a submission finishes processing.
    pub fn submitted() -> Self {
        Self::success(
            "Papers submitted successfully!",
            "Your papers are being processed. Redirecting to results...",
        )
    }

    /// Shown after the simulated signup request.
    pub fn signup_demo() -> Self {
        Self::info(
            "Signup UI Demo",
            "This is a UI-only demo. Account creation is handled by a separate service.",
        )
    }
}

impl From<&UploadError> for Notice {
    fn from(err: &UploadError) -> Self {
        match err {
            UploadError::NoFilesSelected => Notice::error(
                "No files selected",
                "Please upload at least one paper to check.",
            ),
            UploadError::SubmissionInFlight => Notice::warning(
                "Submission in progress",
                "Files cannot be changed while your papers are being processed.",
            ),
        }
    }
}

impl From<&Rejection> for Notice {
    fn from(rejection: &Rejection) -> Self {
        let description = match &rejection.reason {
            RejectReason::UnsupportedType { .. } => {
                "Only PDF, JPG and PNG files are supported.".to_string()
            }
            RejectReason::TooLarge { size, max } => format!(
                "File is {}, the limit is {}.",
                format_megabytes(*size),
                format_megabytes(*max)
            ),
        };
        Notice::warning(format!("{} was not added", rejection.name), description)
    }
}

impl From<&SignupError> for Notice {
    fn from(err: &SignupError) -> Self {
        match err {
            SignupError::PasswordMismatch => Notice::error(
                "Passwords don't match",
                "Please make sure your passwords match.",
            ),
            other => Notice::error("Please check the form", other.to_string()),
        }
    }
}
