use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque descriptor for an accepted resume file. The file body is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeHandle {
    pub id: Uuid,
    pub file_name: String,
    pub content_type: Option<String>,
    pub size_bytes: u64,
}

/// Everything the user has connected so far. Gates which dashboard sections render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedData {
    #[serde(default)]
    pub resume: Option<ResumeHandle>,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
}

/// A single validated user action that mutates `UploadedData`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upload {
    Resume(ResumeHandle),
    Linkedin(String),
    Github(String),
}

impl UploadedData {
    pub fn apply(&mut self, upload: Upload) {
        match upload {
            Upload::Resume(handle) => self.resume = Some(handle),
            Upload::Linkedin(url) => self.linkedin = url,
            Upload::Github(url) => self.github = url,
        }
    }

    pub fn has_resume(&self) -> bool {
        self.resume.is_some()
    }

    pub fn has_linkedin(&self) -> bool {
        !self.linkedin.is_empty()
    }

    pub fn has_github(&self) -> bool {
        !self.github.is_empty()
    }

    pub fn has_any(&self) -> bool {
        self.has_resume() || self.has_linkedin() || self.has_github()
    }
}
