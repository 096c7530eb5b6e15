//! HTTP service uploading the video/audio pair to the backend.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::types::{FileSelection, ResultPayload, SelectedFile, Slot, UploadError};

/// One file part of the multipart body.
#[derive(Clone, Debug, PartialEq)]
pub struct MultipartPart<F> {
    /// Form field name (`videoFile` / `audioFile`)
    pub field: &'static str,
    pub file: F,
    pub filename: String,
    pub mime_type: String,
}

impl<F: SelectedFile> MultipartPart<F> {
    fn from_selection(slot: Slot, selection: &FileSelection<F>) -> Self {
        Self {
            field: slot.field_name(),
            file: selection.file.clone(),
            filename: selection.name.clone(),
            mime_type: selection.mime_type.clone(),
        }
    }
}

/// A fully described upload: target URL plus the two file parts.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadRequest<F> {
    pub url: String,
    pub parts: Vec<MultipartPart<F>>,
}

impl<F: SelectedFile> UploadRequest<F> {
    /// Video part first, then audio.
    pub fn new(url: impl Into<String>, video: &FileSelection<F>, audio: &FileSelection<F>) -> Self {
        Self {
            url: url.into(),
            parts: vec![
                MultipartPart::from_selection(Slot::Video, video),
                MultipartPart::from_selection(Slot::Audio, audio),
            ],
        }
    }

    /// Part sent under the given field name.
    pub fn part(&self, field: &str) -> Option<&MultipartPart<F>> {
        self.parts.iter().find(|p| p.field == field)
    }
}

/// Sends an [`UploadRequest`] and returns the decoded payload.
///
/// Each call performs exactly one round trip.
#[allow(async_fn_in_trait)]
pub trait UploadTransport<F> {
    async fn send(&self, request: UploadRequest<F>) -> Result<ResultPayload, UploadError>;
}

/// Browser transport built on `fetch` through gloo-net.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport;

impl HttpTransport {
    pub fn new() -> Self {
        Self
    }
}

impl UploadTransport<File> for HttpTransport {
    async fn send(&self, request: UploadRequest<File>) -> Result<ResultPayload, UploadError> {
        let form_data = build_form_data(&request.parts)?;

        // Content-Type is left to the browser so it can add the boundary
        let response = Request::post(&request.url)
            .body(form_data)
            .map_err(|e| UploadError::FormData(e.to_string()))?
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        interpret_response(status, &body)
    }
}

fn build_form_data(parts: &[MultipartPart<File>]) -> Result<FormData, UploadError> {
    let form_data = FormData::new().map_err(|e| UploadError::FormData(format!("{:?}", e)))?;

    for part in parts {
        form_data
            .append_with_blob_and_filename(part.field, &part.file, &part.filename)
            .map_err(|e| UploadError::FormData(format!("{}: {:?}", part.field, e)))?;
    }

    Ok(form_data)
}

/// Map a raw HTTP status and body onto the upload outcome.
pub fn interpret_response(status: u16, body: &str) -> Result<ResultPayload, UploadError> {
    if !(200..300).contains(&status) {
        return Err(UploadError::Status {
            status,
            body: body.to_string(),
        });
    }

    serde_json::from_str(body).map_err(|e| UploadError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeFile(&'static str, &'static str);

    impl SelectedFile for FakeFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
        fn mime_type(&self) -> String {
            self.1.to_string()
        }
    }

    #[test]
    fn test_request_parts() {
        let video = FileSelection::new(FakeFile("meeting.mp4", "video/mp4"));
        let audio = FileSelection::new(FakeFile("meeting.mp3", "audio/mpeg"));
        let request = UploadRequest::new("http://localhost:5000/", &video, &audio);

        assert_eq!(request.url, "http://localhost:5000/");
        assert_eq!(request.parts.len(), 2);

        let video_part = request.part("videoFile").unwrap();
        assert_eq!(video_part.filename, "meeting.mp4");
        assert_eq!(video_part.mime_type, "video/mp4");

        let audio_part = request.part("audioFile").unwrap();
        assert_eq!(audio_part.filename, "meeting.mp3");
        assert_eq!(audio_part.file, FakeFile("meeting.mp3", "audio/mpeg"));
    }

    #[test]
    fn test_success_response() {
        let payload = interpret_response(200, r#"{"transcript": "..."}"#).unwrap();
        assert_eq!(payload.0["transcript"], "...");

        // Any 2xx counts as success
        assert!(interpret_response(201, "[]").is_ok());
    }

    #[test]
    fn test_error_status() {
        let err = interpret_response(500, "Internal Server Error").unwrap_err();
        assert_eq!(
            err,
            UploadError::Status {
                status: 500,
                body: "Internal Server Error".to_string()
            }
        );

        // A JSON body does not rescue a failing status
        assert!(matches!(
            interpret_response(504, r#"{"error": "timeout"}"#),
            Err(UploadError::Status { status: 504, .. })
        ));
    }

    #[test]
    fn test_non_json_body() {
        assert!(matches!(
            interpret_response(200, "<html>ok</html>"),
            Err(UploadError::Decode(_))
        ));
    }
}
