//! Application configuration.
//!
//! Centralized configuration for the Patch upload page. Values are
//! compile-time constants; the backend URL can be overridden at build
//! time through the `PATCH_BACKEND_URL` environment variable.

/// Backend base URL used when `PATCH_BACKEND_URL` is not set at build time.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Path, relative to the backend URL, that receives the multipart upload.
pub const UPLOAD_PATH: &str = "/";

/// Route of the result view the page navigates to after a successful upload.
pub const RESULT_ROUTE: &str = "/result";

/// MIME types accepted in the video slot (MP4 and QuickTime MOV).
pub const VIDEO_FILE_TYPES: &[&str] = &["video/mp4", "video/quicktime"];

/// MIME types accepted in the audio slot (MP3 and M4A).
///
/// Browsers disagree on the type they report for `.m4a` and some report
/// `audio/mp3` for MP3, so every spelling seen in the wild is listed.
pub const AUDIO_FILE_TYPES: &[&str] = &[
    "audio/mpeg",
    "audio/mp3",
    "audio/mp4",
    "audio/x-m4a",
    "audio/m4a",
];

/// Toast shown when more than one file is dropped on a slot.
pub const NUM_FILES_ERROR: &str = "Please upload only one file at a time.";

/// Toast shown when a file's type is not accepted by its slot.
pub const INVALID_FILE_ERROR: &str = "Invalid file type. Please check the acceptable file types.";

/// How long a toast stays on screen (in milliseconds).
pub const TOAST_LIFETIME_MS: u32 = 5_000;

/// Maximum toasts kept on screen at once.
pub const MAX_TOASTS: usize = 4;

/// Backend base URL, without a trailing slash.
pub fn backend_url() -> &'static str {
    option_env!("PATCH_BACKEND_URL")
        .unwrap_or(DEFAULT_BACKEND_URL)
        .trim_end_matches('/')
}

/// Full URL of the upload endpoint.
pub fn upload_url() -> String {
    format!("{}{}", backend_url(), UPLOAD_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url_joins_path() {
        let url = upload_url();
        assert!(url.starts_with(backend_url()));
        assert!(url.ends_with(UPLOAD_PATH));
        assert!(!backend_url().ends_with('/'));
    }
}
