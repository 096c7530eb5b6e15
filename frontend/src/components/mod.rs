//! UI Components for the Patch upload page.
//!
//! # Layout Components
//! - [`Header`] - Logo linking back to the upload page
//!
//! # Feature Components
//! - [`UploadSection`] - Video + audio selection with drag & drop, and submission
//! - [`UploadErrorModal`] - Blocking dialog shown when an upload fails
//! - [`ToastStack`] - Transient validation notifications
//! - [`ResultView`] - Result route receiving the upload payload

mod header;
mod upload;
mod error_modal;
mod toast;
mod result;

pub use header::*;
pub use upload::*;
pub use error_modal::*;
pub use toast::*;
pub use result::*;
