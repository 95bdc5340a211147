//! Axum route handlers for Upload & Connect.
//!
//! The caller's current `UploadedData` is threaded through each request and
//! returned updated, so the page root stays the single owner of that state.

use axum::{
    extract::{rejection::JsonRejection, Multipart},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::notice::Notice;
use crate::models::upload::{Upload, UploadedData};
use crate::upload::validation::{
    is_pdf, validate_github_url, validate_linkedin_url, validate_resume, UploadError,
};

const RESUME_FIELD: &str = "resume";
const UPLOADED_DATA_FIELD: &str = "uploadedData";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectProfileRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub uploaded_data: UploadedData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub notice: Notice,
    pub uploaded_data: UploadedData,
}

/// POST /api/v1/uploads/resume
///
/// Multipart body: a `resume` file part and an optional `uploadedData` JSON part.
/// Only the file's name, type and size are kept. The file type is checked
/// before any of the body is read.
pub async fn handle_resume_upload(
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, UploadError> {
    let mut uploaded_data = UploadedData::default();
    let mut resume = None;

    while let Some(mut field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                if !is_pdf(&file_name, content_type.as_deref()) {
                    return Err(UploadError::NotPdf);
                }

                // Only the size is kept, so the contents are counted and dropped.
                let mut size_bytes = 0u64;
                while let Some(chunk) = field.chunk().await? {
                    size_bytes += chunk.len() as u64;
                }
                resume = Some(validate_resume(
                    &file_name,
                    content_type.as_deref(),
                    size_bytes,
                )?);
            }
            Some(UPLOADED_DATA_FIELD) => {
                let text = field.text().await?;
                uploaded_data = serde_json::from_str(&text)
                    .map_err(|e| UploadError::Malformed(e.to_string()))?;
            }
            _ => {}
        }
    }

    let handle = resume.ok_or(UploadError::MissingFile)?;
    info!(
        "Resume accepted: {} ({} bytes)",
        handle.file_name, handle.size_bytes
    );
    uploaded_data.apply(Upload::Resume(handle));

    Ok(Json(UploadResponse {
        notice: Notice::info(
            "Resume uploaded successfully!",
            "We're analyzing your resume now.",
        ),
        uploaded_data,
    }))
}

/// POST /api/v1/uploads/linkedin
pub async fn handle_linkedin_connect(
    payload: Result<Json<ConnectProfileRequest>, JsonRejection>,
) -> Result<Json<UploadResponse>, UploadError> {
    let Json(request) = payload.map_err(|e| UploadError::Malformed(e.body_text()))?;
    let url = validate_linkedin_url(&request.url)?;

    let mut uploaded_data = request.uploaded_data;
    uploaded_data.apply(Upload::Linkedin(url));

    Ok(Json(UploadResponse {
        notice: Notice::info(
            "LinkedIn profile connected!",
            "We're analyzing your profile now.",
        ),
        uploaded_data,
    }))
}

/// POST /api/v1/uploads/github
pub async fn handle_github_connect(
    payload: Result<Json<ConnectProfileRequest>, JsonRejection>,
) -> Result<Json<UploadResponse>, UploadError> {
    let Json(request) = payload.map_err(|e| UploadError::Malformed(e.body_text()))?;
    let url = validate_github_url(&request.url)?;

    let mut uploaded_data = request.uploaded_data;
    uploaded_data.apply(Upload::Github(url));

    Ok(Json(UploadResponse {
        notice: Notice::info(
            "GitHub profile connected!",
            "We're analyzing your repositories now.",
        ),
        uploaded_data,
    }))
}
