//! JSON analysis requests.
//!
//! An [`AnalysisRequest`] carries an annotated document together with the
//! configuration to analyze it with. It is the input of
//! [`crate::analyze_json`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "config": { "window_size": 4, "top_n": 5 },
//!   "sentences": [
//!     [
//!       { "text": "Rust", "pos": "PROPN" },
//!       { "text": "is", "pos": "AUX", "is_stopword": true },
//!       { "text": "fast", "pos": "ADJ" }
//!     ]
//!   ]
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::validation::{UnknownFieldsRule, ValidationEngine, ValidationReport};
use crate::error::Result;
use crate::types::{AnnotatedSentence, TextRankConfig};

/// An annotated document plus the configuration to analyze it with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Omitted means all defaults.
    #[serde(default)]
    pub config: TextRankConfig,

    pub sentences: Vec<AnnotatedSentence>,

    /// Top-level fields the schema doesn't recognize.
    #[serde(flatten, skip_serializing)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl AnalysisRequest {
    pub fn new(config: TextRankConfig, sentences: Vec<AnnotatedSentence>) -> Self {
        Self {
            config,
            sentences,
            unknown_fields: HashMap::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Config diagnostics plus diagnostics for unknown top-level fields.
    /// `config.strict` governs both.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationEngine::with_defaults().validate(&self.config);
        let top_level =
            UnknownFieldsRule::check_unknowns("", &self.unknown_fields, self.config.strict);
        // Rewrite config-level paths so they point into the request document
        for diag in &mut report.diagnostics {
            diag.error.path = format!("/config{}", diag.error.path);
        }
        report.diagnostics.extend(top_level);
        report
    }
}
