//! UI components shared by the pages.
//!
//! # Layout Components
//! - [`Navbar`] - Navigation, theme toggle and mobile menu
//! - [`Footer`] - Page footer
//! - [`ToastStack`] - Transient notices, fed through [`Toaster`]
//!
//! # Upload Components
//! - [`Dropzone`] - Drag & drop target with file picker
//! - [`FileList`] - Staged files with previews
//! - [`ProgressPanel`] - Submission progress with cancel

mod dropzone;
mod file_list;
mod footer;
mod navbar;
mod progress;
mod toaster;

pub use dropzone::*;
pub use file_list::*;
pub use footer::*;
pub use navbar::*;
pub use progress::*;
pub use toaster::*;
