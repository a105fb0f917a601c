//! Browser services.
//!
//! Thin bindings between browser objects and the core crate:
//!
//! - [`files`] - `File` as [`papercheck::FileMeta`], object URL previews
//! - [`report`] - "Download Report" as a JSON blob

pub mod files;
pub mod report;

pub use files::*;
pub use report::*;
