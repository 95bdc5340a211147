//! Validation rules for the Upload & Connect widget.
//!
//! - Resume: accepted when the MIME type is `application/pdf` or the file name
//!   ends in `.pdf`.
//! - LinkedIn / GitHub: accepted when the text contains `linkedin.com` /
//!   `github.com`. No further URL parsing is done.

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::models::notice::Notice;
use crate::models::upload::ResumeHandle;

const PDF_MIME: &str = "application/pdf";
const LINKEDIN_DOMAIN: &str = "linkedin.com";
const GITHUB_DOMAIN: &str = "github.com";

/// Largest multipart body accepted on the resume route.
pub const RESUME_BODY_LIMIT: usize = 25 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("Please upload a PDF file.")]
    NotPdf,

    #[error("No file was provided.")]
    MissingFile,

    #[error("Please enter a valid LinkedIn profile URL.")]
    InvalidLinkedin,

    #[error("Please enter a valid GitHub profile URL.")]
    InvalidGithub,

    #[error("Resumes must be smaller than 25 MB.")]
    TooLarge,

    #[error("Malformed upload: {0}")]
    Malformed(String),
}

impl UploadError {
    pub fn notice(&self) -> Notice {
        let title = match self {
            UploadError::NotPdf => "Invalid file type",
            UploadError::MissingFile => "No file selected",
            UploadError::TooLarge => "File too large",
            UploadError::Malformed(_) => "Upload failed",
            UploadError::InvalidLinkedin => "Invalid LinkedIn URL",
            UploadError::InvalidGithub => "Invalid GitHub URL",
        };
        Notice::destructive(title, self.to_string())
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        tracing::debug!("Upload rejected: {self}");
        let status = match &self {
            UploadError::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        };
        let body = Json(json!({ "notice": self.notice() }));
        (status, body).into_response()
    }
}

impl From<MultipartError> for UploadError {
    fn from(e: MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            UploadError::TooLarge
        } else {
            UploadError::Malformed(e.body_text())
        }
    }
}

pub fn is_pdf(file_name: &str, content_type: Option<&str>) -> bool {
    content_type == Some(PDF_MIME) || file_name.ends_with(".pdf")
}

pub fn validate_resume(
    file_name: &str,
    content_type: Option<&str>,
    size_bytes: u64,
) -> Result<ResumeHandle, UploadError> {
    if !is_pdf(file_name, content_type) {
        return Err(UploadError::NotPdf);
    }
    Ok(ResumeHandle {
        id: Uuid::new_v4(),
        file_name: file_name.to_string(),
        content_type: content_type.map(str::to_string),
        size_bytes,
    })
}

pub fn validate_linkedin_url(url: &str) -> Result<String, UploadError> {
    if url.is_empty() || !url.contains(LINKEDIN_DOMAIN) {
        return Err(UploadError::InvalidLinkedin);
    }
    Ok(url.to_string())
}

pub fn validate_github_url(url: &str) -> Result<String, UploadError> {
    if url.is_empty() || !url.contains(GITHUB_DOMAIN) {
        return Err(UploadError::InvalidGithub);
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notice::NoticeVariant;

    #[test]
    fn test_pdf_by_mime() {
        assert!(is_pdf("resume", Some("application/pdf")));
    }

    #[test]
    fn test_pdf_by_extension() {
        assert!(is_pdf("resume.pdf", Some("application/octet-stream")));
        assert!(is_pdf("resume.pdf", None));
    }

    #[test]
    fn test_reject_docx() {
        let err = validate_resume(
            "resume.docx",
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
            2048,
        )
        .unwrap_err();
        assert_eq!(err, UploadError::NotPdf);
        let notice = err.notice();
        assert_eq!(notice.title, "Invalid file type");
        assert_eq!(notice.variant, NoticeVariant::Destructive);
    }

    #[test]
    fn test_accepted_resume_keeps_metadata() {
        let handle = validate_resume("cv.pdf", Some("application/pdf"), 4096).unwrap();
        assert_eq!(handle.file_name, "cv.pdf");
        assert_eq!(handle.size_bytes, 4096);
    }

    #[test]
    fn test_too_large_maps_to_413() {
        let err = UploadError::TooLarge;
        assert_eq!(err.notice().title, "File too large");
        assert_eq!(
            err.into_response().status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn test_linkedin_substring_rule() {
        assert!(validate_linkedin_url("https://www.linkedin.com/in/jane").is_ok());
        // Substring check only: no scheme or path validation.
        assert!(validate_linkedin_url("linkedin.com").is_ok());
        assert_eq!(
            validate_linkedin_url("https://github.com/jane"),
            Err(UploadError::InvalidLinkedin)
        );
        assert_eq!(validate_linkedin_url(""), Err(UploadError::InvalidLinkedin));
    }

    #[test]
    fn test_github_substring_rule() {
        assert!(validate_github_url("https://github.com/jane").is_ok());
        assert_eq!(
            validate_github_url("https://gitlab.com/jane"),
            Err(UploadError::InvalidGithub)
        );
        assert_eq!(
            validate_github_url("").unwrap_err().notice().title,
            "Invalid GitHub URL"
        );
    }
}
