// src/view.rs
//! UI state machine and its rendering.
//!
//! `render` is the only place that decides what is visible. Surfaces receive a
//! complete `ResultsView` on every transition and never toggle pieces on their own.

use std::fmt;
use std::io::Write;
use tracing::warn;

use crate::types::EvaluationResult;

pub const SUBMIT_LABEL: &str = "Evaluate My Resume";
pub const BUSY_LABEL: &str = "Analyzing...";

pub const NO_MATCH_PLACEHOLDER: &str = "Not available";
pub const NO_KEYWORDS_PLACEHOLDER: &str = "No missing keywords found. Great job!";
pub const NO_SUMMARY_PLACEHOLDER: &str = "No summary provided.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success(EvaluationResult),
    Error(String),
}

impl UiState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Error(_) => "error",
        }
    }

    /// Process exit status once a submission has finished
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Success(_) => 0,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordsView {
    Tags(Vec<String>),
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsContent {
    pub jd_match: String,
    pub keywords: KeywordsView,
    pub summary: String,
}

/// Everything a surface shows. `content` being `Some` means the content
/// region is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub submit: SubmitControl,
    pub results_visible: bool,
    pub loader_visible: bool,
    pub content: Option<ResultsContent>,
    pub error: Option<String>,
}

pub fn render(state: &UiState) -> ResultsView {
    let ready = SubmitControl {
        label: SUBMIT_LABEL,
        enabled: true,
    };

    match state {
        UiState::Idle => ResultsView {
            submit: ready,
            results_visible: false,
            loader_visible: false,
            content: None,
            error: None,
        },
        UiState::Loading => ResultsView {
            submit: SubmitControl {
                label: BUSY_LABEL,
                enabled: false,
            },
            results_visible: true,
            loader_visible: true,
            content: None,
            error: None,
        },
        UiState::Success(result) => ResultsView {
            submit: ready,
            results_visible: true,
            loader_visible: false,
            content: Some(ResultsContent::from(result)),
            error: None,
        },
        UiState::Error(message) => ResultsView {
            submit: ready,
            results_visible: false,
            loader_visible: false,
            content: None,
            error: Some(message.clone()),
        },
    }
}

impl From<&EvaluationResult> for ResultsContent {
    fn from(result: &EvaluationResult) -> Self {
        let keywords = if result.missing_keywords.is_empty() {
            KeywordsView::Empty(NO_KEYWORDS_PLACEHOLDER)
        } else {
            KeywordsView::Tags(result.missing_keywords.clone())
        };

        Self {
            jd_match: result.jd_match().unwrap_or(NO_MATCH_PLACEHOLDER).to_string(),
            keywords,
            summary: result
                .profile_summary()
                .unwrap_or(NO_SUMMARY_PLACEHOLDER)
                .to_string(),
        }
    }
}

impl fmt::Display for ResultsContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✅ JD Match")?;
        writeln!(f, "   {}", self.jd_match)?;
        writeln!(f)?;
        writeln!(f, "❌ Missing Keywords")?;
        match &self.keywords {
            KeywordsView::Tags(tags) => {
                let tags: Vec<String> = tags.iter().map(|tag| format!("[{}]", tag)).collect();
                writeln!(f, "   {}", tags.join(" "))?;
            }
            KeywordsView::Empty(placeholder) => writeln!(f, "   {}", placeholder)?,
        }
        writeln!(f)?;
        writeln!(f, "📝 Profile Summary & Actionable Feedback")?;
        write!(f, "   {}", self.summary)
    }
}

/// Receives every rendered view, in order
pub trait ResultsSurface {
    fn present(&mut self, view: &ResultsView);
}

/// Prints transitions to a terminal: the loader and errors to `err`, the
/// results panel to `out`.
pub struct TerminalSurface<O: Write, E: Write> {
    out: O,
    err: E,
    show_results: bool,
}

impl<O: Write, E: Write> TerminalSurface<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            show_results: true,
        }
    }

    /// Leave the results panel to the caller (used for JSON output)
    pub fn without_results(mut self) -> Self {
        self.show_results = false;
        self
    }

    fn write_view(&mut self, view: &ResultsView) -> std::io::Result<()> {
        if view.loader_visible {
            writeln!(self.err, "{}", view.submit.label)?;
        }
        if let Some(content) = &view.content {
            if self.show_results {
                writeln!(self.out, "{}", content)?;
            }
        }
        if let Some(error) = &view.error {
            writeln!(self.err, "{}", error)?;
        }
        self.out.flush()?;
        self.err.flush()
    }
}

impl<O: Write, E: Write> ResultsSurface for TerminalSurface<O, E> {
    fn present(&mut self, view: &ResultsView) {
        if let Err(e) = self.write_view(view) {
            warn!("Failed to write to terminal: {}", e);
        }
    }
}

/// Keeps every view it is given
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub views: Vec<ResultsView>,
}

impl RecordingSurface {
    pub fn last(&self) -> Option<&ResultsView> {
        self.views.last()
    }
}

impl ResultsSurface for RecordingSurface {
    fn present(&mut self, view: &ResultsView) {
        self.views.push(view.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_result() -> EvaluationResult {
        EvaluationResult {
            jd_match: Some("82%".to_string()),
            missing_keywords: vec!["Kubernetes".to_string(), "gRPC".to_string()],
            profile_summary: Some("Strong backend experience.".to_string()),
        }
    }

    #[test]
    fn test_idle() {
        let view = render(&UiState::Idle);
        assert_eq!(view.submit.label, SUBMIT_LABEL);
        assert!(view.submit.enabled);
        assert!(!view.results_visible);
        assert!(view.error.is_none());
    }

    #[test]
    fn test_loading_hides_content_and_disables_submit() {
        let view = render(&UiState::Loading);
        assert_eq!(view.submit.label, BUSY_LABEL);
        assert!(!view.submit.enabled);
        assert!(view.results_visible);
        assert!(view.loader_visible);
        assert!(view.content.is_none());
        assert!(view.error.is_none());
    }

    #[test]
    fn test_success_scenario() {
        let view = render(&UiState::Success(scenario_result()));
        assert!(view.submit.enabled);
        assert_eq!(view.submit.label, SUBMIT_LABEL);
        assert!(view.results_visible);
        assert!(!view.loader_visible);
        assert!(view.error.is_none());

        let content = view.content.unwrap();
        assert_eq!(content.jd_match, "82%");
        assert_eq!(
            content.keywords,
            KeywordsView::Tags(vec!["Kubernetes".to_string(), "gRPC".to_string()])
        );
        assert_eq!(content.summary, "Strong backend experience.");
    }

    #[test]
    fn test_success_placeholders() {
        let view = render(&UiState::Success(EvaluationResult::default()));
        let content = view.content.unwrap();
        assert_eq!(content.jd_match, "Not available");
        assert_eq!(
            content.keywords,
            KeywordsView::Empty("No missing keywords found. Great job!")
        );
        assert_eq!(content.summary, "No summary provided.");
    }

    #[test]
    fn test_error_hides_results() {
        let view = render(&UiState::Error("Error: X".to_string()));
        assert_eq!(view.error.as_deref(), Some("Error: X"));
        assert!(!view.results_visible);
        assert!(view.content.is_none());
        assert!(view.submit.enabled);
        assert_eq!(view.submit.label, SUBMIT_LABEL);
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(UiState::Success(EvaluationResult::default()).exit_status(), 0);
        assert_eq!(UiState::Error("Error: X".to_string()).exit_status(), 1);
        assert_eq!(UiState::Idle.exit_status(), 1);
    }

    #[test]
    fn test_panel_text() {
        let content = ResultsContent::from(&scenario_result());
        let text = content.to_string();
        assert!(text.contains("✅ JD Match\n   82%"));
        assert!(text.contains("[Kubernetes] [gRPC]"));
        assert!(text.ends_with("   Strong backend experience."));
    }

    #[test]
    fn test_terminal_surface_routes_output() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        {
            let mut surface = TerminalSurface::new(&mut out, &mut err);
            surface.present(&render(&UiState::Loading));
            surface.present(&render(&UiState::Success(scenario_result())));
            surface.present(&render(&UiState::Error("Error: X".to_string())));
        }
        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();

        assert!(out.contains("82%"));
        assert!(!out.contains("Analyzing..."));
        assert_eq!(err, "Analyzing...\nError: X\n");
    }

    #[test]
    fn test_terminal_surface_without_results() {
        let mut out = Vec::new();
        {
            let mut surface = TerminalSurface::new(&mut out, std::io::sink()).without_results();
            surface.present(&render(&UiState::Success(scenario_result())));
        }
        assert!(out.is_empty());
    }
}
