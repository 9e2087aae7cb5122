// src/core/service_client.rs
//! HTTP client for the evaluation service - one multipart POST per submission

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::{debug, info, trace};

use crate::error::SubmissionError;
use crate::submission::SubmissionRequest;
use crate::types::{EvaluationFailure, EvaluationResult};

pub const EVALUATE_ENDPOINT: &str = "/evaluate";

const JD_FIELD: &str = "jd";
const RESUME_FIELD: &str = "resume";

/// Anything that can turn a validated submission into an evaluation
#[async_trait]
pub trait EvaluationService: Send + Sync {
    async fn evaluate(
        &self,
        request: &SubmissionRequest,
    ) -> Result<EvaluationResult, SubmissionError>;
}

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Without `timeout_seconds` the transport's own behavior applies
    pub fn new(base_url: &str, timeout_seconds: Option<u64>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn evaluate_url(&self) -> String {
        format!("{}{}", self.base_url, EVALUATE_ENDPOINT)
    }

    fn build_form(request: &SubmissionRequest) -> Result<Form, SubmissionError> {
        let resume = Part::bytes(request.resume.bytes.clone())
            .file_name(request.resume.file_name.clone())
            .mime_str(request.resume.content_type)?;

        Ok(Form::new()
            .text(JD_FIELD, request.job_description.clone())
            .part(RESUME_FIELD, resume))
    }
}

#[async_trait]
impl EvaluationService for ServiceClient {
    async fn evaluate(
        &self,
        request: &SubmissionRequest,
    ) -> Result<EvaluationResult, SubmissionError> {
        let url = self.evaluate_url();
        let form = Self::build_form(request)?;

        info!(
            "Calling evaluation service: {} (resume: {}, {} bytes)",
            url,
            request.resume.file_name,
            request.resume.bytes.len()
        );

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        trace!("Response status: {}", status);

        // The body is JSON on both success and failure
        let body = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            debug!("Evaluation service returned non-JSON body ({}): {}", status, e);
            SubmissionError::MalformedResponse(e)
        })?;

        debug!("API response: {}", value);

        if !status.is_success() {
            let failure = EvaluationFailure::from_json(value);
            if let Some(detail) = &failure.json_error {
                debug!("Evaluation service JSON error detail: {}", detail);
            }
            let message = failure.message();
            debug!("Evaluation failed with status {}: {}", status, message);
            return Err(SubmissionError::Evaluation {
                status: status.as_u16(),
                message,
            });
        }

        Ok(EvaluationResult::from_json(value)?)
    }
}
