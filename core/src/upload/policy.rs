//! File acceptance rules.
//!
//! A candidate is admitted when its declared MIME type is one of the
//! accepted types (exact, case-sensitive) and its size does not exceed
//! the per-file limit. The type is checked first.

use serde::{Deserialize, Serialize};

use crate::error::RejectReason;

/// Default per-file size limit: 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Metadata every candidate file must expose.
///
/// Implemented by the browser `File` wrapper in the frontend and by
/// [`crate::LocalFile`] for the CLI.
pub trait FileMeta {
    /// Display name, usually the file name without directories.
    fn name(&self) -> String;
    /// Size in bytes.
    fn size(&self) -> u64;
    /// Declared MIME type, e.g. `application/pdf`.
    fn mime_type(&self) -> String;
}

/// Coarse file category used to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Image,
    Other,
}

impl FileKind {
    /// Categorize a declared MIME type.
    pub fn from_mime(mime: &str) -> Self {
        if mime == mime::APPLICATION_PDF.essence_str() {
            FileKind::Pdf
        } else if is_image(mime) {
            FileKind::Image
        } else {
            FileKind::Other
        }
    }
}

/// True for `image/*` types, the only ones that get a preview.
pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Declared MIME type for a file extension, the way a browser file picker
/// assigns one. Unknown extensions map to `application/octet-stream`.
pub fn mime_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "pdf" => "application/pdf",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "txt" => "text/plain",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

/// Type and size constraints for staged files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPolicy {
    /// Accepted MIME types, matched exactly.
    pub accepted_types: Vec<String>,
    /// Maximum size per file in bytes (inclusive).
    pub max_file_size: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            accepted_types: vec![
                mime::APPLICATION_PDF.essence_str().to_string(),
                mime::IMAGE_JPEG.essence_str().to_string(),
                mime::IMAGE_PNG.essence_str().to_string(),
            ],
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl UploadPolicy {
    /// Decide whether a candidate may be staged.
    pub fn check<F: FileMeta + ?Sized>(&self, file: &F) -> Result<(), RejectReason> {
        let mime = file.mime_type();
        if !self.accepts_type(&mime) {
            return Err(RejectReason::UnsupportedType { mime });
        }

        let size = file.size();
        if size > self.max_file_size {
            return Err(RejectReason::TooLarge {
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }

    pub fn accepts_type(&self, mime: &str) -> bool {
        self.accepted_types.iter().any(|t| t == mime)
    }

    /// Value for an `<input type="file" accept=...>` attribute.
    pub fn accept_attribute(&self) -> String {
        self.accepted_types.join(",")
    }

    /// Human readable size limit, e.g. "10MB".
    pub fn max_size_label(&self) -> String {
        format!("{}MB", self.max_file_size / (1024 * 1024))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Candidate {
        mime: &'static str,
        size: u64,
    }

    impl FileMeta for Candidate {
        fn name(&self) -> String {
            "paper".to_string()
        }
        fn size(&self) -> u64 {
            self.size
        }
        fn mime_type(&self) -> String {
            self.mime.to_string()
        }
    }

    #[test]
    fn test_default_policy_accepts_pdf_jpeg_png() {
        let policy = UploadPolicy::default();
        for mime in ["application/pdf", "image/jpeg", "image/png"] {
            assert!(policy.check(&Candidate { mime, size: 1024 }).is_ok(), "{mime}");
        }
    }

    #[test]
    fn test_type_match_is_case_sensitive() {
        let policy = UploadPolicy::default();
        let err = policy
            .check(&Candidate {
                mime: "Application/PDF",
                size: 10,
            })
            .unwrap_err();
        assert_eq!(
            err,
            RejectReason::UnsupportedType {
                mime: "Application/PDF".into()
            }
        );
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let policy = UploadPolicy::default();
        assert!(policy
            .check(&Candidate {
                mime: "image/png",
                size: DEFAULT_MAX_FILE_SIZE,
            })
            .is_ok());
        assert_eq!(
            policy.check(&Candidate {
                mime: "image/png",
                size: DEFAULT_MAX_FILE_SIZE + 1,
            }),
            Err(RejectReason::TooLarge {
                size: DEFAULT_MAX_FILE_SIZE + 1,
                max: DEFAULT_MAX_FILE_SIZE,
            })
        );
    }

    #[test]
    fn test_type_checked_before_size() {
        let policy = UploadPolicy::default();
        let err = policy
            .check(&Candidate {
                mime: "image/gif",
                size: u64::MAX,
            })
            .unwrap_err();
        assert!(matches!(err, RejectReason::UnsupportedType { .. }));
    }

    #[test]
    fn test_file_kind_and_extensions() {
        assert_eq!(FileKind::from_mime("application/pdf"), FileKind::Pdf);
        assert_eq!(FileKind::from_mime("image/png"), FileKind::Image);
        assert_eq!(FileKind::from_mime("text/plain"), FileKind::Other);
        assert_eq!(mime_for_extension("JPG"), "image/jpeg");
        assert_eq!(mime_for_extension("bin"), "application/octet-stream");
        assert_eq!(UploadPolicy::default().max_size_label(), "10MB");
    }
}
