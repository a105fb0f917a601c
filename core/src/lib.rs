//! # PaperCheck core
//!
//! Domain logic behind the PaperCheck demo site: staging exam papers for
//! checking, simulating their submission, and the grading result the
//! results page displays.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Picker /   │────▶│   Policy    │────▶│  Staging    │────▶│  Submission │──▶ results view
//! │  Drop zone  │     │ (type/size) │     │    set      │     │  (timeline) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! The crate has no browser dependency. The frontend plugs in browser
//! files, object-URL previews and timers through [`FileMeta`], the preview
//! factory closure and the sleep function given to [`simulate`].
//!
//! ## Quick Start
//!
//! ```rust
//! use papercheck::{UploadPolicy, UploadSession, UploadError, LocalFile};
//!
//! let mut session: UploadSession<LocalFile, ()> = UploadSession::new(UploadPolicy::default());
//! assert_eq!(session.submit().unwrap_err(), UploadError::NoFilesSelected);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Environment-driven configuration
//! - [`upload`] - Policy, staging set, timeline, transfer, session
//! - [`results`] - Grading result model
//! - [`grading`] - Grading service boundary
//! - [`signup`] - Signup form validation
//! - [`notice`] - Transient notices
//! - [`site`] - Navigation and theme state

// Core modules
pub mod config;
pub mod error;

// Upload flow
pub mod upload;

// Results
pub mod grading;
pub mod results;

// Presentation state
pub mod notice;
pub mod signup;
pub mod site;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{
    ConfigError, ConfigResult, GradingError, GradingServiceResult, RejectReason, SignupError,
    SignupResult, UploadError, UploadResult,
};

// =============================================================================
// Re-exports - Upload
// =============================================================================

pub use upload::{
    format_megabytes, is_image, mime_for_extension, simulate, timeline, BatchEntry, FileKind,
    FileMeta, LocalFile, Rejection, StageReport, StagedFile, StagedId, StagingSet, Submission,
    SubmissionBatch, SubmissionEvent, SubmissionState, SubmissionTiming, TransferHandle,
    TransferStream, UploadEffect, UploadPolicy, UploadSession, DEFAULT_MAX_FILE_SIZE,
};

// =============================================================================
// Re-exports - Results & Grading
// =============================================================================

pub use grading::{GradingBackend, JobTicket, SampleGrading};
pub use results::{ExpandedQuestions, GradeBand, GradingResult, QuestionResult, QuestionStatus, StatusCounts};

// =============================================================================
// Re-exports - Presentation
// =============================================================================

pub use config::AppConfig;
pub use notice::{Notice, NoticeLevel};
pub use signup::{SignupForm, UserRole, MIN_PASSWORD_LEN};
pub use site::{is_active, MenuState, NavLink, Theme, NAV_LINKS};
