//! Upload session: staging set plus submission state machine.
//!
//! ```text
//! Idle --submit(non-empty)--> InProgress --Completed--> Complete --Navigate--> (results view)
//!   ^                            |
//!   +---------- cancel ----------+
//! ```
//!
//! Timer events are fed in through [`UploadSession::apply`]; the session
//! answers with an [`UploadEffect`] for the view layer to perform.

use serde::{Deserialize, Serialize};

use super::policy::{FileMeta, UploadPolicy};
use super::staging::{StageReport, StagedFile, StagedId, StagingSet};
use super::timeline::SubmissionEvent;
use crate::error::{UploadError, UploadResult};
use crate::notice::Notice;

/// Submission progress as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SubmissionState {
    Idle,
    InProgress { progress: u8 },
    Complete,
}

impl SubmissionState {
    /// Progress percentage; `Complete` always reports 100.
    pub fn progress(&self) -> u8 {
        match self {
            SubmissionState::Idle => 0,
            SubmissionState::InProgress { progress } => *progress,
            SubmissionState::Complete => 100,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionState::Idle)
    }
}

/// One file as handed to the grading service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

/// Snapshot of the staged files at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionBatch {
    pub files: Vec<BatchEntry>,
}

impl SubmissionBatch {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }
}

/// A started submission. Events for it must be applied with its `attempt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub attempt: u32,
    pub batch: SubmissionBatch,
}

/// Work the view layer has to do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadEffect {
    /// Show a transient notice.
    Notify(Notice),
    /// Leave for the results view with the submitted batch.
    ShowResults(SubmissionBatch),
}

/// Staged files and submission state of one upload view.
#[derive(Debug)]
pub struct UploadSession<F, P> {
    policy: UploadPolicy,
    staged: StagingSet<F, P>,
    state: SubmissionState,
    attempt: u32,
    pending: Option<SubmissionBatch>,
}

impl<F: FileMeta, P> UploadSession<F, P> {
    pub fn new(policy: UploadPolicy) -> Self {
        Self {
            policy,
            staged: StagingSet::new(),
            state: SubmissionState::Idle,
            attempt: 0,
            pending: None,
        }
    }

    /// Offer a batch of candidate files (drop or picker).
    ///
    /// Refused while a submission is running, so the staged set always
    /// matches the batch being graded.
    pub fn offer<I, M>(&mut self, batch: I, make_preview: M) -> UploadResult<StageReport>
    where
        I: IntoIterator<Item = F>,
        M: FnMut(&F) -> Option<P>,
    {
        if self.is_busy() {
            return Err(UploadError::SubmissionInFlight);
        }
        Ok(self.staged.stage(batch, &self.policy, make_preview))
    }
}

impl<F, P> UploadSession<F, P> {
    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn progress(&self) -> u8 {
        self.state.progress()
    }

    pub fn files(&self) -> impl Iterator<Item = &StagedFile<F, P>> {
        self.staged.iter()
    }

    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// True from submit until the session is back to idle.
    pub fn is_busy(&self) -> bool {
        !self.state.is_idle()
    }

    /// Whether the submit affordance should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.staged.is_empty() && self.state.is_idle()
    }

    /// Remove a staged file. Refused while a submission is running.
    pub fn remove(&mut self, id: &StagedId) -> UploadResult<bool> {
        if self.is_busy() {
            return Err(UploadError::SubmissionInFlight);
        }
        Ok(self.staged.remove(id))
    }

    /// Start a submission.
    pub fn submit(&mut self) -> UploadResult<Submission> {
        if self.is_busy() {
            return Err(UploadError::SubmissionInFlight);
        }
        if self.staged.is_empty() {
            return Err(UploadError::NoFilesSelected);
        }

        let batch = SubmissionBatch {
            files: self
                .staged
                .iter()
                .map(|f| BatchEntry {
                    name: f.name().to_string(),
                    size: f.size(),
                    mime_type: f.mime_type().to_string(),
                })
                .collect(),
        };

        self.attempt = self.attempt.wrapping_add(1);
        self.state = SubmissionState::InProgress { progress: 0 };
        self.pending = Some(batch.clone());
        log::info!("Submitting {} file(s), attempt {}", batch.len(), self.attempt);

        Ok(Submission {
            attempt: self.attempt,
            batch,
        })
    }

    /// Abandon a running submission. Staged files are kept.
    ///
    /// Returns `false` if nothing was running.
    pub fn cancel(&mut self) -> bool {
        if !matches!(self.state, SubmissionState::InProgress { .. }) {
            return false;
        }
        log::info!("Submission attempt {} cancelled", self.attempt);
        self.attempt = self.attempt.wrapping_add(1);
        self.state = SubmissionState::Idle;
        self.pending = None;
        true
    }

    /// Fold one timer event of `attempt` into the state.
    ///
    /// Events of stale attempts, or that do not fit the current state,
    /// are ignored.
    pub fn apply(&mut self, attempt: u32, event: SubmissionEvent) -> Option<UploadEffect> {
        if attempt != self.attempt {
            log::debug!("Ignoring {:?} from stale attempt {}", event, attempt);
            return None;
        }

        match (self.state, event) {
            (SubmissionState::InProgress { progress }, SubmissionEvent::Progress(p)) => {
                self.state = SubmissionState::InProgress {
                    progress: progress.max(p.min(100)),
                };
                None
            }
            (SubmissionState::InProgress { .. }, SubmissionEvent::Completed) => {
                self.state = SubmissionState::Complete;
                log::info!("Submission attempt {} complete", attempt);
                Some(UploadEffect::Notify(Notice::submitted()))
            }
            (SubmissionState::Complete, SubmissionEvent::Navigate) => {
                // `take` makes the navigation one-shot.
                self.pending.take().map(UploadEffect::ShowResults)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;
    use crate::upload::staging::tests::{pdf, png, CountingPreview, FakeFile};
    use crate::upload::timeline::{timeline, SubmissionTiming};
    use std::cell::Cell;
    use std::rc::Rc;

    fn session() -> UploadSession<FakeFile, ()> {
        UploadSession::new(UploadPolicy::default())
    }

    fn run_all(session: &mut UploadSession<FakeFile, ()>, attempt: u32) -> Vec<UploadEffect> {
        timeline(&SubmissionTiming::default())
            .into_iter()
            .filter_map(|(_, e)| session.apply(attempt, e))
            .collect()
    }

    #[test]
    fn test_empty_submit_stays_idle() {
        let mut s = session();
        assert_eq!(s.submit(), Err(UploadError::NoFilesSelected));
        assert_eq!(s.state(), SubmissionState::Idle);
        assert!(!s.can_submit());

        let notice = Notice::from(&UploadError::NoFilesSelected);
        assert_eq!(notice.title, "No files selected");
        assert_eq!(notice.level, NoticeLevel::Error);
    }

    #[test]
    fn test_submit_goes_in_progress_immediately() {
        let mut s = session();
        s.offer(vec![pdf("a.pdf", 10), png("b.png", 20)], |_| None).unwrap();
        assert!(s.can_submit());

        let submission = s.submit().unwrap();
        assert_eq!(s.state(), SubmissionState::InProgress { progress: 0 });
        assert_eq!(submission.batch.len(), 2);
        assert_eq!(submission.batch.files[0].name, "a.pdf");
        assert_eq!(submission.batch.total_size(), 30);
        assert!(!s.can_submit());
    }

    #[test]
    fn test_second_submit_rejected() {
        let mut s = session();
        s.offer(vec![pdf("a.pdf", 10)], |_| None).unwrap();
        s.submit().unwrap();
        assert_eq!(s.submit(), Err(UploadError::SubmissionInFlight));
    }

    #[test]
    fn test_remove_rejected_while_in_progress() {
        let mut s = session();
        let report = s.offer(vec![pdf("a.pdf", 10), pdf("b.pdf", 10)], |_| None).unwrap();
        s.submit().unwrap();

        assert_eq!(s.remove(&report.accepted[0]), Err(UploadError::SubmissionInFlight));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_remove_when_idle() {
        let mut s = session();
        let report = s.offer(vec![pdf("a.pdf", 10), pdf("b.pdf", 10)], |_| None).unwrap();
        assert_eq!(s.remove(&report.accepted[1]), Ok(true));
        assert_eq!(s.remove(&report.accepted[1]), Ok(false));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_progress_rises_by_ten_then_navigates_once() {
        let mut s = session();
        s.offer(vec![pdf("a.pdf", 10)], |_| None).unwrap();
        let submission = s.submit().unwrap();

        let mut seen = Vec::new();
        let mut effects = Vec::new();
        for (_, event) in timeline(&SubmissionTiming::default()) {
            if let Some(effect) = s.apply(submission.attempt, event) {
                effects.push(effect);
            }
            seen.push(s.progress());
        }

        let rising: Vec<u8> = seen.iter().copied().take(10).collect();
        assert_eq!(rising, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert_eq!(s.state(), SubmissionState::Complete);

        assert_eq!(effects.len(), 2);
        assert!(matches!(&effects[0], UploadEffect::Notify(n) if n.level == NoticeLevel::Success));
        assert_eq!(effects[1], UploadEffect::ShowResults(submission.batch.clone()));

        // A duplicate navigate does nothing.
        assert_eq!(s.apply(submission.attempt, SubmissionEvent::Navigate), None);
    }

    #[test]
    fn test_complete_forces_progress_to_100() {
        let mut s = session();
        s.offer(vec![pdf("a.pdf", 10)], |_| None).unwrap();
        let submission = s.submit().unwrap();

        s.apply(submission.attempt, SubmissionEvent::Progress(40));
        s.apply(submission.attempt, SubmissionEvent::Completed);
        assert_eq!(s.progress(), 100);

        // Late cadence events cannot lower it.
        s.apply(submission.attempt, SubmissionEvent::Progress(50));
        assert_eq!(s.state(), SubmissionState::Complete);
    }

    #[test]
    fn test_navigate_requires_completion() {
        let mut s = session();
        s.offer(vec![pdf("a.pdf", 10)], |_| None).unwrap();
        let submission = s.submit().unwrap();
        assert_eq!(s.apply(submission.attempt, SubmissionEvent::Navigate), None);
        assert!(matches!(s.state(), SubmissionState::InProgress { .. }));
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut s = session();
        s.offer(vec![pdf("a.pdf", 10)], |_| None).unwrap();
        let submission = s.submit().unwrap();
        s.apply(submission.attempt, SubmissionEvent::Progress(60));
        s.apply(submission.attempt, SubmissionEvent::Progress(30));
        assert_eq!(s.progress(), 60);
    }

    #[test]
    fn test_cancel_ignores_late_events() {
        let mut s = session();
        s.offer(vec![pdf("a.pdf", 10)], |_| None).unwrap();
        let first = s.submit().unwrap();
        s.apply(first.attempt, SubmissionEvent::Progress(10));

        assert!(s.cancel());
        assert_eq!(s.state(), SubmissionState::Idle);
        assert_eq!(s.len(), 1);
        assert!(run_all(&mut s, first.attempt).is_empty());
        assert_eq!(s.state(), SubmissionState::Idle);

        let second = s.submit().unwrap();
        assert_ne!(second.attempt, first.attempt);
        assert_eq!(run_all(&mut s, second.attempt).len(), 2);
        assert!(!s.cancel());
    }

    #[test]
    fn test_offer_refused_while_submitting() {
        let mut s = session();
        s.offer(vec![pdf("a.pdf", 10)], |_| None).unwrap();
        let submission = s.submit().unwrap();

        assert_eq!(
            s.offer(vec![pdf("late.pdf", 10)], |_| None),
            Err(UploadError::SubmissionInFlight)
        );
        assert_eq!(s.len(), 1);
        assert_eq!(submission.batch.len(), s.len());

        assert!(s.cancel());
        let report = s.offer(vec![pdf("late.pdf", 10)], |_| None).unwrap();
        assert_eq!(report.accepted.len(), 1);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_dropping_session_releases_previews() {
        let released = Rc::new(Cell::new(0));
        let mut s: UploadSession<FakeFile, CountingPreview> = UploadSession::new(UploadPolicy::default());
        s.offer(vec![png("a.png", 1), png("b.png", 1), pdf("c.pdf", 1)], |_| {
            Some(CountingPreview(released.clone()))
        })
        .unwrap();
        drop(s);
        assert_eq!(released.get(), 2);
    }
}
