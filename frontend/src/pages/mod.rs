//! Routed pages.
//!
//! - [`Landing`] - `/`
//! - [`UploadPage`] - `/upload`, the staging and submission flow
//! - [`ResultsPage`] - `/results`, optionally `?job=<ticket>`
//! - [`SignupPage`] - `/signup`
//! - [`NotFound`] - everything else

mod landing;
mod not_found;
mod results;
mod signup;
mod upload;

pub use landing::*;
pub use not_found::*;
pub use results::*;
pub use signup::*;
pub use upload::*;
