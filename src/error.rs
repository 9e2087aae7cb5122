// src/error.rs
use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "Please provide both a job description and a resume file.";

/// Everything that can end a submission in the Error state
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("{0}")]
    Validation(String),

    /// The evaluation service answered with a non-2xx status
    #[error("{message}")]
    Evaluation { status: u16, message: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    MalformedResponse(#[from] serde_json::Error),
}

impl SubmissionError {
    pub fn validation() -> Self {
        Self::Validation(VALIDATION_MESSAGE.to_string())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Evaluation { .. } => "EVALUATION_FAILED",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::MalformedResponse(_) => "MALFORMED_RESPONSE",
        }
    }

    /// Text for the error region. Validation messages are shown as-is.
    pub fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            other => format!("Error: {}", other),
        }
    }
}
