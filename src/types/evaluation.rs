// src/types/evaluation.rs
//! Wire types for the `/evaluate` endpoint.
//!
//! The evaluation service is an LLM behind a thin web layer, so its bodies are
//! decoded leniently: a field of the wrong type counts as absent rather than
//! failing the whole response.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Successful evaluation body (HTTP 2xx)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    #[serde(
        rename = "JD Match",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub jd_match: Option<String>,

    #[serde(
        rename = "MissingKeywords",
        default,
        deserialize_with = "lenient_keywords"
    )]
    pub missing_keywords: Vec<String>,

    #[serde(
        rename = "Profile Summary",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_summary: Option<String>,
}

/// Failure body (HTTP non-2xx)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EvaluationFailure {
    #[serde(default, deserialize_with = "lenient_text")]
    pub error: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub raw_response: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub json_error: Option<String>,
}

impl EvaluationResult {
    /// Decode a 2xx body. `null` is rejected; any other non-object value
    /// carries no fields and renders with placeholders.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Null => Err(serde::de::Error::custom(
                "evaluation response is null",
            )),
            Value::Object(_) => serde_json::from_value(value),
            _ => Ok(Self::default()),
        }
    }

    /// Pretty JSON using the wire field names
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn jd_match(&self) -> Option<&str> {
        non_empty(self.jd_match.as_deref())
    }

    pub fn profile_summary(&self) -> Option<&str> {
        non_empty(self.profile_summary.as_deref())
    }
}

impl EvaluationFailure {
    /// Decode a non-2xx body. Anything that is not an object yields an empty failure.
    pub fn from_json(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Message shown to the user: `error`, joined with `raw_response` when the
    /// service included the raw model output.
    pub fn message(&self) -> String {
        let error = non_empty(self.error.as_deref());
        let raw = non_empty(self.raw_response.as_deref());

        match (error, raw) {
            (Some(error), Some(raw)) => format!("{}: {}", error, raw),
            (None, Some(raw)) => format!("{}: {}", UNKNOWN_ERROR_MESSAGE, raw),
            (Some(error), None) => error.to_string(),
            (None, None) => UNKNOWN_ERROR_MESSAGE.to_string(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_keywords<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let keywords = match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(keywords)
}
