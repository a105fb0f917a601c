//! The ordered set of files waiting for submission.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::policy::{is_image, FileKind, FileMeta, UploadPolicy};
use crate::error::RejectReason;

/// Identity of a staged file, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StagedId(Uuid);

impl StagedId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StagedId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StagedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// A file admitted to the staging set.
///
/// `P` is the preview resource. It is released by dropping it, so removing
/// the entry (or dropping the whole set) releases it exactly once.
#[derive(Debug)]
pub struct StagedFile<F, P> {
    id: StagedId,
    file: F,
    preview: Option<P>,
    name: String,
    size: u64,
    mime_type: String,
}

impl<F, P> StagedFile<F, P> {
    pub fn id(&self) -> StagedId {
        self.id
    }

    pub fn file(&self) -> &F {
        &self.file
    }

    pub fn preview(&self) -> Option<&P> {
        self.preview.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn kind(&self) -> FileKind {
        FileKind::from_mime(&self.mime_type)
    }

    /// Size in megabytes with two decimals, e.g. "2.00 MB".
    pub fn size_label(&self) -> String {
        format_megabytes(self.size)
    }
}

/// Format a byte count as megabytes with two decimals.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// A candidate that was not staged, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub name: String,
    pub reason: RejectReason,
}

/// Outcome of offering one batch of files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageReport {
    /// Identities of the staged files, in offering order.
    pub accepted: Vec<StagedId>,
    /// Excluded files, in offering order.
    pub rejected: Vec<Rejection>,
}

impl StageReport {
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty() && self.rejected.is_empty()
    }
}

/// Insertion-ordered collection of [`StagedFile`]s.
#[derive(Debug)]
pub struct StagingSet<F, P> {
    entries: Vec<StagedFile<F, P>>,
}

impl<F, P> Default for StagingSet<F, P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<F: FileMeta, P> StagingSet<F, P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit every candidate that passes `policy`, appending in order.
    ///
    /// `make_preview` is only called for accepted image files.
    pub fn stage<I, M>(&mut self, batch: I, policy: &UploadPolicy, mut make_preview: M) -> StageReport
    where
        I: IntoIterator<Item = F>,
        M: FnMut(&F) -> Option<P>,
    {
        let mut report = StageReport::default();

        for file in batch {
            let name = file.name();
            if let Err(reason) = policy.check(&file) {
                log::warn!("Rejected '{}': {}", name, reason);
                report.rejected.push(Rejection { name, reason });
                continue;
            }

            let mime_type = file.mime_type();
            let preview = if is_image(&mime_type) {
                make_preview(&file)
            } else {
                None
            };

            let id = StagedId::new();
            log::debug!("Staged '{}' as {}", name, id);
            self.entries.push(StagedFile {
                id,
                size: file.size(),
                file,
                preview,
                name,
                mime_type,
            });
            report.accepted.push(id);
        }

        report
    }
}

impl<F, P> StagingSet<F, P> {
    /// Remove an entry by identity, releasing its preview.
    ///
    /// Returns `false` when the identity is unknown.
    pub fn remove(&mut self, id: &StagedId) -> bool {
        match self.entries.iter().position(|e| &e.id == id) {
            Some(index) => {
                let removed = self.entries.remove(index);
                log::debug!("Removed '{}' ({})", removed.name, removed.id);
                drop(removed);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &StagedFile<F, P>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    pub(crate) struct FakeFile {
        pub name: &'static str,
        pub mime: &'static str,
        pub size: u64,
    }

    impl FileMeta for FakeFile {
        fn name(&self) -> String {
            self.name.to_string()
        }
        fn size(&self) -> u64 {
            self.size
        }
        fn mime_type(&self) -> String {
            self.mime.to_string()
        }
    }

    pub(crate) fn pdf(name: &'static str, size: u64) -> FakeFile {
        FakeFile {
            name,
            mime: "application/pdf",
            size,
        }
    }

    pub(crate) fn png(name: &'static str, size: u64) -> FakeFile {
        FakeFile {
            name,
            mime: "image/png",
            size,
        }
    }

    /// Preview that counts its own releases.
    pub(crate) struct CountingPreview(pub Rc<Cell<usize>>);

    impl Drop for CountingPreview {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    const MB: u64 = 1024 * 1024;

    #[test]
    fn test_pdf_accepted_oversized_png_rejected() {
        let mut set: StagingSet<FakeFile, ()> = StagingSet::new();
        let report = set.stage(
            vec![pdf("paper.pdf", 2 * MB), png("scan.png", 12 * MB)],
            &UploadPolicy::default(),
            |_| Some(()),
        );

        assert_eq!(set.len(), 1);
        assert_eq!(report.accepted.len(), 1);
        assert_eq!(set.iter().next().unwrap().name(), "paper.pdf");
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].name, "scan.png");
        assert!(matches!(
            report.rejected[0].reason,
            RejectReason::TooLarge { size, .. } if size == 12 * MB
        ));
    }

    #[test]
    fn test_order_preserved_across_batches() {
        let mut set: StagingSet<FakeFile, ()> = StagingSet::new();
        let policy = UploadPolicy::default();
        set.stage(vec![pdf("a.pdf", 1), png("b.png", 1)], &policy, |_| None);
        set.stage(
            vec![
                FakeFile {
                    name: "c.txt",
                    mime: "text/plain",
                    size: 1,
                },
                pdf("d.pdf", 1),
            ],
            &policy,
            |_| None,
        );

        let names: Vec<&str> = set.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["a.pdf", "b.png", "d.pdf"]);
    }

    #[test]
    fn test_preview_only_for_images() {
        let mut set: StagingSet<FakeFile, &'static str> = StagingSet::new();
        let mut calls = 0;
        set.stage(
            vec![pdf("a.pdf", 1), png("b.png", 1)],
            &UploadPolicy::default(),
            |_| {
                calls += 1;
                Some("blob:preview")
            },
        );

        assert_eq!(calls, 1);
        let previews: Vec<Option<&&str>> = set.iter().map(|e| e.preview()).collect();
        assert_eq!(previews, vec![None, Some(&"blob:preview")]);
    }

    #[test]
    fn test_remove_releases_preview_once() {
        let released = Rc::new(Cell::new(0));
        let mut set: StagingSet<FakeFile, CountingPreview> = StagingSet::new();
        let report = set.stage(
            vec![png("a.png", 1), png("b.png", 1)],
            &UploadPolicy::default(),
            |_| Some(CountingPreview(released.clone())),
        );

        assert!(set.remove(&report.accepted[0]));
        assert_eq!(set.len(), 1);
        assert_eq!(released.get(), 1);

        assert!(!set.remove(&report.accepted[0]));
        assert_eq!(set.len(), 1);
        assert_eq!(released.get(), 1);

        drop(set);
        assert_eq!(released.get(), 2);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut set: StagingSet<FakeFile, ()> = StagingSet::new();
        set.stage(vec![pdf("a.pdf", 1)], &UploadPolicy::default(), |_| None);
        assert!(!set.remove(&StagedId::new()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_identities_are_unique() {
        let mut set: StagingSet<FakeFile, ()> = StagingSet::new();
        let batch: Vec<FakeFile> = (0..50).map(|_| pdf("same.pdf", 1)).collect();
        set.stage(batch, &UploadPolicy::default(), |_| None);

        let mut ids: Vec<StagedId> = set.iter().map(|e| e.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_rejection_round_trips_json() {
        let rejection = Rejection {
            name: "scan.png".to_string(),
            reason: RejectReason::TooLarge {
                size: 12 * MB,
                max: 10 * MB,
            },
        };

        let json = serde_json::to_string(&rejection).unwrap();
        assert!(json.contains("\"kind\":\"tooLarge\""));
        let back: Rejection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rejection);
    }

    #[test]
    fn test_size_label() {
        assert_eq!(format_megabytes(2 * MB), "2.00 MB");
        assert_eq!(format_megabytes(1536 * 1024), "1.50 MB");
    }
}
