//! Validation engine for [`TextRankConfig`].
//!
//! The engine runs every registered [`ValidationRule`] and collects all
//! diagnostics into a [`ValidationReport`]; it never stops at the first
//! error, so callers see every problem at once.
//!
//! ```rust
//! use textrank_keywords::pipeline::validation::ValidationEngine;
//! use textrank_keywords::TextRankConfig;
//!
//! let cfg = TextRankConfig::default().with_window_size(1);
//! let report = ValidationEngine::with_defaults().validate(&cfg);
//! assert!(report.has_errors());
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::error::{ConfigError, ErrorCode, KeywordError, Result};
use crate::nlp::stopwords::{is_supported_language, SUPPORTED_LANGUAGES};
use crate::types::TextRankConfig;

// ─── Severity ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: ConfigError,
}

impl ValidationDiagnostic {
    pub fn error(err: ConfigError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: ConfigError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &ConfigError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// No errors (warnings are acceptable)
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Log warnings, then fail with [`KeywordError::InvalidConfig`] if any
    /// error was found.
    pub fn into_result(self) -> Result<()> {
        #[cfg(feature = "tracing")]
        for warning in self.warnings() {
            tracing::warn!(%warning, "configuration warning");
        }
        if self.has_errors() {
            Err(KeywordError::InvalidConfig(self))
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in self.errors() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
            first = false;
        }
        Ok(())
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single stateless check over a config.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier (e.g. `"window_size"`)
    fn name(&self) -> &str;

    fn validate(&self, cfg: &TextRankConfig) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// An engine with no rules
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(WindowSizeRule));
        engine.add_rule(Box::new(DampingRule));
        engine.add_rule(Box::new(ThresholdRule));
        engine.add_rule(Box::new(IterationCapRule));
        engine.add_rule(Box::new(CandidatePosRule));
        engine.add_rule(Box::new(StopwordLanguageRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn validate(&self, cfg: &TextRankConfig) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(cfg));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Validate `cfg` with the default rules.
pub fn validate_config(cfg: &TextRankConfig) -> Result<()> {
    ValidationEngine::with_defaults().validate(cfg).into_result()
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Window must span at least two tokens ───────────────────────────────

struct WindowSizeRule;

impl ValidationRule for WindowSizeRule {
    fn name(&self) -> &str {
        "window_size"
    }

    fn validate(&self, cfg: &TextRankConfig) -> Vec<ValidationDiagnostic> {
        if cfg.window_size < 2 {
            vec![ValidationDiagnostic::error(
                ConfigError::new(
                    ErrorCode::OutOfRange,
                    "/window_size",
                    format!("window_size must be at least 2, got {}", cfg.window_size),
                )
                .with_hint("Use 2 to pair adjacent candidates only"),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 2. Damping in [0, 1] ──────────────────────────────────────────────────

struct DampingRule;

impl ValidationRule for DampingRule {
    fn name(&self) -> &str {
        "damping"
    }

    fn validate(&self, cfg: &TextRankConfig) -> Vec<ValidationDiagnostic> {
        if (0.0..=1.0).contains(&cfg.damping) {
            vec![]
        } else {
            vec![ValidationDiagnostic::error(
                ConfigError::new(
                    ErrorCode::OutOfRange,
                    "/damping",
                    format!("damping must be within [0, 1], got {}", cfg.damping),
                )
                .with_hint("The usual value is 0.85"),
            )]
        }
    }
}

// ─── 3. Threshold finite and non-negative ──────────────────────────────────

struct ThresholdRule;

impl ValidationRule for ThresholdRule {
    fn name(&self) -> &str {
        "convergence_threshold"
    }

    fn validate(&self, cfg: &TextRankConfig) -> Vec<ValidationDiagnostic> {
        let t = cfg.convergence_threshold;
        if t.is_finite() && t >= 0.0 {
            vec![]
        } else {
            vec![ValidationDiagnostic::error(ConfigError::new(
                ErrorCode::OutOfRange,
                "/convergence_threshold",
                format!("convergence_threshold must be finite and non-negative, got {t}"),
            ))]
        }
    }
}

// ─── 4. At least one iteration ─────────────────────────────────────────────

struct IterationCapRule;

impl ValidationRule for IterationCapRule {
    fn name(&self) -> &str {
        "max_iterations"
    }

    fn validate(&self, cfg: &TextRankConfig) -> Vec<ValidationDiagnostic> {
        if cfg.max_iterations == 0 {
            vec![ValidationDiagnostic::error(
                ConfigError::new(
                    ErrorCode::OutOfRange,
                    "/max_iterations",
                    "max_iterations must be greater than 0",
                )
                .with_hint("The usual value is 10"),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 5. Empty candidate POS set (warning) ──────────────────────────────────

struct CandidatePosRule;

impl ValidationRule for CandidatePosRule {
    fn name(&self) -> &str {
        "candidate_pos"
    }

    fn validate(&self, cfg: &TextRankConfig) -> Vec<ValidationDiagnostic> {
        if cfg.candidate_pos.is_empty() {
            vec![ValidationDiagnostic::warning(
                ConfigError::new(
                    ErrorCode::Degenerate,
                    "/candidate_pos",
                    "candidate_pos is empty; no token can become a keyword",
                )
                .with_hint("Add NOUN and PROPN"),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 6. Known stopword language ────────────────────────────────────────────

struct StopwordLanguageRule;

impl ValidationRule for StopwordLanguageRule {
    fn name(&self) -> &str {
        "stopword_language"
    }

    fn validate(&self, cfg: &TextRankConfig) -> Vec<ValidationDiagnostic> {
        match cfg.stopword_language.as_deref() {
            Some(lang) if !is_supported_language(lang) => {
                vec![ValidationDiagnostic::error(
                    ConfigError::new(
                        ErrorCode::Unsupported,
                        "/stopword_language",
                        format!("no stopword list for language \"{lang}\""),
                    )
                    .with_hint(format!(
                        "Use one of {} or null for no base list",
                        SUPPORTED_LANGUAGES.join(", ")
                    )),
                )]
            }
            _ => vec![],
        }
    }
}

// ─── 7. Unknown fields (strict → error, non-strict → warning) ──────────────

pub(crate) struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// Diagnostics for extra fields captured by `#[serde(flatten)]` at `path`.
    /// Keys are reported in sorted order.
    pub(crate) fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    ConfigError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, cfg: &TextRankConfig) -> Vec<ValidationDiagnostic> {
        Self::check_unknowns("", &cfg.unknown_fields, cfg.strict)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════
