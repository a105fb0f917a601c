//! Upload staging flow.
//!
//! - [`policy`] - accepted types and size limit
//! - [`staging`] - ordered staging set with preview lifetimes
//! - [`timeline`] - schedule of the simulated submission
//! - [`transfer`] - the schedule as a cancellable stream
//! - [`session`] - staging set plus submission state machine
//! - [`local`] - local files for the CLI

pub mod local;
pub mod policy;
pub mod session;
pub mod staging;
pub mod timeline;
pub mod transfer;

pub use local::LocalFile;
pub use policy::{is_image, mime_for_extension, FileKind, FileMeta, UploadPolicy, DEFAULT_MAX_FILE_SIZE};
pub use session::{
    BatchEntry, Submission, SubmissionBatch, SubmissionState, UploadEffect, UploadSession,
};
pub use staging::{format_megabytes, Rejection, StageReport, StagedFile, StagedId, StagingSet};
pub use timeline::{timeline, SubmissionEvent, SubmissionTiming};
pub use transfer::{simulate, TransferHandle, TransferStream};
