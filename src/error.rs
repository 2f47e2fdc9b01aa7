//! Error types

use std::fmt;

use serde::Serialize;

use crate::pipeline::validation::ValidationReport;

/// Stable machine-readable code attached to every configuration diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A numeric parameter is outside its allowed range
    OutOfRange,
    /// A setting selects something that doesn't exist (e.g. a stopword language)
    Unsupported,
    /// A setting is valid but will lead to an empty result
    Degenerate,
    /// A field the schema doesn't recognize
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OutOfRange => "out_of_range",
            Self::Unsupported => "unsupported",
            Self::Degenerate => "degenerate",
            Self::UnknownField => "unknown_field",
        }
    }
}

/// A single problem found in a [`crate::TextRankConfig`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigError {
    pub code: ErrorCode,
    /// JSON-pointer style location, e.g. `/window_size`
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ConfigError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.as_str(), self.path, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

/// Top-level error type for keyword extraction
#[derive(Debug, thiserror::Error)]
pub enum KeywordError {
    /// The configuration failed validation; the report lists every problem.
    #[error("invalid configuration: {0}")]
    InvalidConfig(ValidationReport),

    /// The external annotator failed to produce sentences.
    #[error("annotation failed: {source}")]
    Annotation {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An annotated document or request could not be parsed.
    #[error("malformed analysis request: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for keyword extraction
pub type Result<T> = std::result::Result<T, KeywordError>;
