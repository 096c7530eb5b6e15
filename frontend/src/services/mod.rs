//! Backend services.
//!
//! # Services
//!
//! - [`upload`] - Multipart upload of the video/audio pair

pub mod upload;

pub use upload::*;
