//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Slot Types** - The two required inputs and their allow-lists
//! - **File Types** - Abstraction over browser file handles
//! - **API Types** - Backend response payload
//! - **Error Types** - Validation and upload errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{AUDIO_FILE_TYPES, INVALID_FILE_ERROR, NUM_FILES_ERROR, VIDEO_FILE_TYPES};

// =============================================================================
// Slot Types
// =============================================================================

/// One of the two inputs the upload form requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Recording with the audio that needs replacing
    Video,
    /// Separately recorded clean audio
    Audio,
}

impl Slot {
    /// MIME types this slot accepts.
    pub fn accepted_types(&self) -> &'static [&'static str] {
        match self {
            Slot::Video => VIDEO_FILE_TYPES,
            Slot::Audio => AUDIO_FILE_TYPES,
        }
    }

    /// Whether a declared MIME type is in this slot's allow-list.
    pub fn accepts(&self, mime_type: &str) -> bool {
        self.accepted_types().contains(&mime_type)
    }

    /// Multipart field name the file is sent under.
    pub fn field_name(&self) -> &'static str {
        match self {
            Slot::Video => "videoFile",
            Slot::Audio => "audioFile",
        }
    }

    /// Value for the `accept` attribute of the slot's file picker.
    pub fn accept_attr(&self) -> String {
        self.accepted_types().join(",")
    }

    /// Lowercase label used in log lines and CSS classes.
    pub fn label(&self) -> &'static str {
        match self {
            Slot::Video => "video",
            Slot::Audio => "audio",
        }
    }
}

// =============================================================================
// File Types
// =============================================================================

/// A file handle the user picked or dropped.
///
/// Implemented for [`web_sys::File`] in the browser; tests use plain structs.
pub trait SelectedFile: Clone + 'static {
    /// Original filename, without any path.
    fn file_name(&self) -> String;
    /// MIME type declared by the browser (may be empty).
    fn mime_type(&self) -> String;
}

impl SelectedFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

/// The file currently held by a slot.
#[derive(Clone, Debug, PartialEq)]
pub struct FileSelection<F> {
    /// Handle to the file content
    pub file: F,
    /// Original filename
    pub name: String,
    /// Declared MIME type
    pub mime_type: String,
}

impl<F: SelectedFile> FileSelection<F> {
    pub fn new(file: F) -> Self {
        Self {
            name: file.file_name(),
            mime_type: file.mime_type(),
            file,
        }
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Body of a successful upload response.
///
/// Defined by the backend and forwarded verbatim to the result view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultPayload(pub serde_json::Value);

// =============================================================================
// Error Types
// =============================================================================

/// Reasons a file selection is rejected. None of them change form state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// More than one file was dropped or picked.
    #[error("expected a single {slot:?} file, got {count}")]
    TooManyFiles { slot: Slot, count: usize },

    /// The picker was dismissed or the drop carried no files.
    #[error("no file provided for {0:?}")]
    NoFile(Slot),

    /// Declared MIME type is outside the slot's allow-list.
    #[error("unsupported {slot:?} file type '{mime_type}'")]
    UnsupportedType { slot: Slot, mime_type: String },

    /// Selections are frozen while an upload is outstanding.
    #[error("cannot change the {0:?} file while an upload is in progress")]
    Locked(Slot),
}

impl SelectionError {
    /// Toast to show the user, if this error should be surfaced at all.
    pub fn toast_message(&self) -> Option<&'static str> {
        match self {
            SelectionError::TooManyFiles { .. } => Some(NUM_FILES_ERROR),
            SelectionError::UnsupportedType { .. } => Some(INVALID_FILE_ERROR),
            SelectionError::NoFile(_) | SelectionError::Locked(_) => None,
        }
    }
}

/// Reasons a submission cannot start.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("no {0:?} file selected")]
    MissingFile(Slot),

    #[error("an upload is already in progress")]
    AlreadyInFlight,

    #[error("the upload already succeeded")]
    AlreadySucceeded,
}

/// Upload failures. The user sees one generic dialog for all of them.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Multipart body could not be assembled.
    #[error("failed to build form data: {0}")]
    FormData(String),

    /// Network-layer failure (offline, CORS, timeout at the proxy...).
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Non-2xx response.
    #[error("server error ({status}): {body}")]
    Status { status: u16, body: String },

    /// 2xx response whose body is not JSON.
    #[error("failed to parse response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_lists() {
        assert!(Slot::Video.accepts("video/mp4"));
        assert!(Slot::Video.accepts("video/quicktime"));
        assert!(!Slot::Video.accepts("audio/mpeg"));
        assert!(!Slot::Video.accepts("video/webm"));
        assert!(!Slot::Video.accepts(""));

        assert!(Slot::Audio.accepts("audio/mpeg"));
        assert!(Slot::Audio.accepts("audio/x-m4a"));
        assert!(!Slot::Audio.accepts("video/mp4"));
        assert!(!Slot::Audio.accepts("audio/wav"));
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Slot::Video.field_name(), "videoFile");
        assert_eq!(Slot::Audio.field_name(), "audioFile");
    }

    #[test]
    fn test_toast_messages() {
        let too_many = SelectionError::TooManyFiles { slot: Slot::Video, count: 2 };
        assert_eq!(too_many.toast_message(), Some(NUM_FILES_ERROR));

        let bad_type = SelectionError::UnsupportedType {
            slot: Slot::Audio,
            mime_type: "audio/wav".to_string(),
        };
        assert_eq!(bad_type.toast_message(), Some(INVALID_FILE_ERROR));

        assert_eq!(SelectionError::NoFile(Slot::Audio).toast_message(), None);
        assert_eq!(SelectionError::Locked(Slot::Video).toast_message(), None);
    }

    #[test]
    fn test_payload_is_transparent() {
        let payload: ResultPayload = serde_json::from_str(r#"{"transcript": "hello"}"#).unwrap();
        assert_eq!(payload.0["transcript"], "hello");
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"transcript":"hello"}"#);
    }
}
