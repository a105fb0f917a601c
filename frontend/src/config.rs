//! Application configuration.
//!
//! Centralized configuration for the PaperCheck frontend. The upload
//! policy and submission timing come from `papercheck::AppConfig`; the
//! constants here only concern presentation.

/// Application name, shown in the navbar and page titles.
pub const APP_NAME: &str = "PaperCheck";

/// Maximum notices visible at once. Older ones are dropped first.
pub const MAX_NOTICES: usize = 5;

/// Time before a notice dismisses itself (ms).
pub const NOTICE_TIMEOUT_MS: u32 = 4000;

/// Simulated signup request duration (ms).
pub const SIGNUP_DELAY_MS: u32 = 1500;

/// Query parameter carrying the grading job on the results page.
pub const JOB_QUERY_PARAM: &str = "job";
