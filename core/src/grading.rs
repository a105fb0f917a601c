//! Boundary to the external grading service.
//!
//! The real service is not part of this workspace. [`SampleGrading`]
//! answers in memory with [`GradingResult::sample`].

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{GradingError, GradingServiceResult};
use crate::results::GradingResult;
use crate::upload::SubmissionBatch;

/// Opaque identifier of a grading job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobTicket(Uuid);

impl JobTicket {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a ticket from its string form (e.g. a `?job=` query value).
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl Default for JobTicket {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the site needs from a grading service.
pub trait GradingBackend {
    /// Accept a batch of files for grading.
    fn submit(&self, batch: &SubmissionBatch) -> GradingServiceResult<JobTicket>;

    /// Fetch the result of a submitted job.
    fn result(&self, ticket: &JobTicket) -> GradingServiceResult<GradingResult>;
}

/// In-memory grading service returning the sample result.
#[derive(Debug, Default)]
pub struct SampleGrading {
    issued: RefCell<HashSet<JobTicket>>,
}

impl SampleGrading {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GradingBackend for SampleGrading {
    fn submit(&self, batch: &SubmissionBatch) -> GradingServiceResult<JobTicket> {
        if batch.is_empty() {
            return Err(GradingError::EmptyBatch);
        }
        let ticket = JobTicket::new();
        self.issued.borrow_mut().insert(ticket);
        log::info!("Accepted {} file(s) as job {}", batch.len(), ticket);
        Ok(ticket)
    }

    fn result(&self, ticket: &JobTicket) -> GradingServiceResult<GradingResult> {
        if !self.issued.borrow().contains(ticket) {
            return Err(GradingError::UnknownJob(ticket.to_string()));
        }
        Ok(GradingResult::sample())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::BatchEntry;

    fn batch() -> SubmissionBatch {
        SubmissionBatch {
            files: vec![BatchEntry {
                name: "paper.pdf".into(),
                size: 2048,
                mime_type: "application/pdf".into(),
            }],
        }
    }

    #[test]
    fn test_submit_then_fetch() {
        let grading = SampleGrading::new();
        let ticket = grading.submit(&batch()).unwrap();
        let result = grading.result(&ticket).unwrap();
        assert_eq!(result.grade, "A");
    }

    #[test]
    fn test_empty_batch_rejected() {
        let grading = SampleGrading::new();
        assert_eq!(
            grading.submit(&SubmissionBatch::default()),
            Err(GradingError::EmptyBatch)
        );
    }

    #[test]
    fn test_unknown_ticket() {
        let grading = SampleGrading::new();
        let ticket = JobTicket::new();
        assert_eq!(
            grading.result(&ticket),
            Err(GradingError::UnknownJob(ticket.to_string()))
        );
    }

    #[test]
    fn test_ticket_round_trips_through_text() {
        let ticket = JobTicket::new();
        assert_eq!(JobTicket::parse(&ticket.to_string()), Some(ticket));
        assert_eq!(JobTicket::parse("not-a-ticket"), None);
    }
}
