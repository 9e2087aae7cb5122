pub mod config;
pub mod controller;
pub mod core;
pub mod error;
pub mod submission;
pub mod types;
pub mod utils;
pub mod view;

#[cfg(test)]
mod test_support;

pub use controller::SubmissionController;
pub use error::SubmissionError;
pub use submission::{ResumeAttachment, SubmissionForm, SubmissionRequest};
pub use types::{EvaluationFailure, EvaluationResult};
pub use view::{render, ResultsSurface, ResultsView, UiState};
