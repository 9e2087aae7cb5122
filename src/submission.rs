// src/submission.rs
//! Form inputs and the validated request built from them

use anyhow::{Context, Result};
use std::path::Path;

use crate::error::SubmissionError;
use crate::utils::{content_type_for, file_name_of};

/// Resume file as attached to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeAttachment {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ResumeAttachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name);
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Read a resume from disk. Contents are not inspected.
    pub async fn load(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read resume file: {}", path.display()))?;

        Ok(Self::new(file_name_of(path), bytes))
    }
}

/// Raw form state before submission
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    pub job_description: String,
    pub resume: Option<ResumeAttachment>,
}

/// Validated request, alive for one submit-to-response cycle
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    pub job_description: String,
    pub resume: ResumeAttachment,
}

impl SubmissionForm {
    pub fn new(job_description: impl Into<String>, resume: Option<ResumeAttachment>) -> Self {
        Self {
            job_description: job_description.into(),
            resume,
        }
    }

    /// Build a form from command-line inputs. Text wins over a file; a missing
    /// input leaves the field empty, while an unreadable path is an error.
    pub async fn from_inputs(
        job_description: Option<String>,
        jd_file: Option<&Path>,
        resume: Option<&Path>,
    ) -> Result<Self> {
        let job_description = match (job_description, jd_file) {
            (Some(text), _) => text,
            (None, Some(path)) => tokio::fs::read_to_string(path).await.with_context(|| {
                format!("Failed to read job description: {}", path.display())
            })?,
            (None, None) => String::new(),
        };

        let resume = match resume {
            Some(path) => Some(ResumeAttachment::load(path).await?),
            None => None,
        };

        Ok(Self::new(job_description, resume))
    }

    /// Both inputs are required. The job description is sent untrimmed.
    pub fn validate(self) -> Result<SubmissionRequest, SubmissionError> {
        if self.job_description.trim().is_empty() {
            return Err(SubmissionError::validation());
        }

        let resume = self.resume.ok_or_else(SubmissionError::validation)?;

        Ok(SubmissionRequest {
            job_description: self.job_description,
            resume,
        })
    }
}
