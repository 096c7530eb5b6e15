//! Upload form state.
//!
//! [`UploadForm`] owns both slot selections and the [`SubmissionState`].
//! It knows nothing about the DOM: the view feeds it file handles and
//! transport results, and renders from its queries.
//!
//! ```text
//! Idle ──submit──▶ InFlight ──ok──▶ Succeeded (navigates away)
//!  ▲                  │
//!  └──dismiss── Failed ◀──err──┘
//! ```

use crate::services::upload::UploadRequest;
use crate::types::{
    FileSelection, ResultPayload, SelectedFile, SelectionError, Slot, SubmitError, UploadError,
};

/// Where the single submission currently stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmissionState {
    /// Nothing sent yet, or the last failure was dismissed
    #[default]
    Idle,
    /// Request outstanding; selections are frozen
    InFlight,
    /// Backend accepted the files; terminal
    Succeeded(ResultPayload),
    /// Request failed; the error dialog is open
    Failed,
}

/// What the view should do once a submission settles.
#[derive(Clone, Debug, PartialEq)]
pub enum Completion {
    /// Navigate to the result view with this payload.
    Navigate(ResultPayload),
    /// Open the error dialog.
    ShowError,
    /// No submission was outstanding; nothing to do.
    Ignored,
}

/// The two slot selections plus the submission they feed.
#[derive(Clone, Debug)]
pub struct UploadForm<F> {
    /// File in the video slot
    video: Option<FileSelection<F>>,
    /// File in the audio slot
    audio: Option<FileSelection<F>>,
    /// Progress of the single upload
    submission: SubmissionState,
}

impl<F> Default for UploadForm<F> {
    fn default() -> Self {
        Self {
            video: None,
            audio: None,
            submission: SubmissionState::Idle,
        }
    }
}

impl<F: SelectedFile> UploadForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn selection(&self, slot: Slot) -> Option<&FileSelection<F>> {
        match slot {
            Slot::Video => self.video.as_ref(),
            Slot::Audio => self.audio.as_ref(),
        }
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn is_in_flight(&self) -> bool {
        self.submission == SubmissionState::InFlight
    }

    /// Whether the error dialog is open.
    pub fn show_error(&self) -> bool {
        self.submission == SubmissionState::Failed
    }

    /// Whether the submit button is rendered.
    pub fn can_submit(&self) -> bool {
        self.video.is_some()
            && self.audio.is_some()
            && matches!(self.submission, SubmissionState::Idle | SubmissionState::Failed)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Validate `files` for `slot` and store the single file on success.
    ///
    /// Any error leaves the form untouched.
    pub fn select_file(&mut self, slot: Slot, files: Vec<F>) -> Result<(), SelectionError> {
        if self.is_in_flight() {
            return Err(SelectionError::Locked(slot));
        }

        if files.len() > 1 {
            return Err(SelectionError::TooManyFiles {
                slot,
                count: files.len(),
            });
        }

        let file = files.into_iter().next().ok_or(SelectionError::NoFile(slot))?;
        let mime_type = file.mime_type();
        if !slot.accepts(&mime_type) {
            return Err(SelectionError::UnsupportedType { slot, mime_type });
        }

        *self.slot_mut(slot) = Some(FileSelection::new(file));
        Ok(())
    }

    /// Clear one slot. Refused while an upload is outstanding.
    pub fn cancel_selection(&mut self, slot: Slot) -> Result<(), SelectionError> {
        if self.is_in_flight() {
            return Err(SelectionError::Locked(slot));
        }
        *self.slot_mut(slot) = None;
        Ok(())
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<FileSelection<F>> {
        match slot {
            Slot::Video => &mut self.video,
            Slot::Audio => &mut self.audio,
        }
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Enter `InFlight` and describe the request to send to `url`.
    pub fn begin_submit(&mut self, url: &str) -> Result<UploadRequest<F>, SubmitError> {
        match self.submission {
            SubmissionState::InFlight => return Err(SubmitError::AlreadyInFlight),
            SubmissionState::Succeeded(_) => return Err(SubmitError::AlreadySucceeded),
            SubmissionState::Idle | SubmissionState::Failed => {}
        }

        let video = self.video.as_ref().ok_or(SubmitError::MissingFile(Slot::Video))?;
        let audio = self.audio.as_ref().ok_or(SubmitError::MissingFile(Slot::Audio))?;
        let request = UploadRequest::new(url, video, audio);

        self.submission = SubmissionState::InFlight;
        Ok(request)
    }

    /// Settle the outstanding submission with the transport result.
    pub fn complete(&mut self, result: Result<ResultPayload, UploadError>) -> Completion {
        if !self.is_in_flight() {
            return Completion::Ignored;
        }

        match result {
            Ok(payload) => {
                self.submission = SubmissionState::Succeeded(payload.clone());
                Completion::Navigate(payload)
            }
            Err(_) => {
                self.submission = SubmissionState::Failed;
                Completion::ShowError
            }
        }
    }

    /// Close the error dialog. Selections are kept so the user can resubmit.
    pub fn dismiss_error(&mut self) {
        if self.submission == SubmissionState::Failed {
            self.submission = SubmissionState::Idle;
        }
    }
}
