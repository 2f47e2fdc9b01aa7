//! Core data types
//!
//! Annotated input records, the run configuration and the ranked output.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Universal Dependencies part-of-speech category
///
/// Serialized as the UD tag name; unrecognized names deserialize to
/// [`PosTag::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Auxiliary,
    CoordConjunction,
    SubordConjunction,
    Numeral,
    Particle,
    Interjection,
    Punctuation,
    Symbol,
    Space,
    /// Anything the annotator could not classify, or a tag we don't know
    Other,
}

impl PosTag {
    /// Parse a UD tag name (`"NOUN"`, `"propn"`, ...). Unknown tags map to [`PosTag::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "NOUN" => PosTag::Noun,
            "PROPN" => PosTag::ProperNoun,
            "VERB" => PosTag::Verb,
            "ADJ" => PosTag::Adjective,
            "ADV" => PosTag::Adverb,
            "PRON" => PosTag::Pronoun,
            "DET" => PosTag::Determiner,
            "ADP" => PosTag::Adposition,
            "AUX" => PosTag::Auxiliary,
            "CCONJ" | "CONJ" => PosTag::CoordConjunction,
            "SCONJ" => PosTag::SubordConjunction,
            "NUM" => PosTag::Numeral,
            "PART" => PosTag::Particle,
            "INTJ" => PosTag::Interjection,
            "PUNCT" => PosTag::Punctuation,
            "SYM" => PosTag::Symbol,
            "SPACE" => PosTag::Space,
            _ => PosTag::Other,
        }
    }

    /// The UD tag name
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::ProperNoun => "PROPN",
            PosTag::Verb => "VERB",
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::Pronoun => "PRON",
            PosTag::Determiner => "DET",
            PosTag::Adposition => "ADP",
            PosTag::Auxiliary => "AUX",
            PosTag::CoordConjunction => "CCONJ",
            PosTag::SubordConjunction => "SCONJ",
            PosTag::Numeral => "NUM",
            PosTag::Particle => "PART",
            PosTag::Interjection => "INTJ",
            PosTag::Punctuation => "PUNCT",
            PosTag::Symbol => "SYM",
            PosTag::Space => "SPACE",
            PosTag::Other => "X",
        }
    }
}

impl From<String> for PosTag {
    fn from(value: String) -> Self {
        PosTag::from_tag(&value)
    }
}

impl From<PosTag> for String {
    fn from(value: PosTag) -> Self {
        value.as_str().to_string()
    }
}

impl std::str::FromStr for PosTag {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(PosTag::from_tag(value))
    }
}

/// One token as produced by the linguistic annotator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// Surface text
    pub text: String,
    /// Part-of-speech category
    pub pos: PosTag,
    /// Whether the annotator classified the token as a stopword
    #[serde(default)]
    pub is_stopword: bool,
}

impl AnnotatedToken {
    /// Create a non-stopword token
    pub fn new(text: impl Into<String>, pos: PosTag) -> Self {
        Self {
            text: text.into(),
            pos,
            is_stopword: false,
        }
    }

    /// Create a token already marked as a stopword
    pub fn stopword(text: impl Into<String>, pos: PosTag) -> Self {
        Self {
            text: text.into(),
            pos,
            is_stopword: true,
        }
    }
}

/// A sentence is the annotator's token sequence between two boundaries.
pub type AnnotatedSentence = Vec<AnnotatedToken>;

/// A keyword and its final TextRank weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedKeyword {
    pub word: String,
    pub weight: f64,
}

impl RankedKeyword {
    pub fn new(word: impl Into<String>, weight: f64) -> Self {
        Self {
            word: word.into(),
            weight,
        }
    }
}

/// Configuration for one keyword analysis
///
/// Deserializable from JSON; omitted fields take their defaults and fields the
/// schema doesn't know are captured in `unknown_fields` for the validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRankConfig {
    /// Part-of-speech categories eligible to become graph nodes
    pub candidate_pos: Vec<PosTag>,
    /// Co-occurrence window size (at least 2)
    pub window_size: usize,
    /// Lower-case candidate tokens before building the vocabulary
    pub lowercase: bool,
    /// Caller-supplied stopwords; marked on annotated input and merged into
    /// the annotator's stopword set
    pub extra_stopwords: Vec<String>,
    /// Base stopword list handed to the annotator, `None` for no base list.
    /// Flags on already annotated tokens are never re-derived from it.
    pub stopword_language: Option<String>,
    /// Damping coefficient
    pub damping: f64,
    /// Convergence threshold on the change of the weight sum
    pub convergence_threshold: f64,
    /// Iteration step cap
    pub max_iterations: usize,
    /// Keyword count returned by [`crate::KeywordAnalysis::keywords`]
    pub top_n: usize,
    /// Treat unknown fields as errors instead of warnings
    pub strict: bool,
    #[serde(flatten, skip_serializing)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for TextRankConfig {
    fn default() -> Self {
        Self {
            candidate_pos: vec![PosTag::Noun, PosTag::ProperNoun],
            window_size: 4,
            lowercase: false,
            extra_stopwords: Vec::new(),
            stopword_language: Some("en".to_string()),
            damping: 0.85,
            convergence_threshold: 1e-5,
            max_iterations: 10,
            top_n: 10,
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl TextRankConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_candidate_pos(mut self, candidate_pos: impl IntoIterator<Item = PosTag>) -> Self {
        self.candidate_pos = candidate_pos.into_iter().collect();
        self
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn with_extra_stopwords<S: Into<String>>(
        mut self,
        words: impl IntoIterator<Item = S>,
    ) -> Self {
        self.extra_stopwords = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_stopword_language(mut self, language: Option<&str>) -> Self {
        self.stopword_language = language.map(str::to_string);
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Whether `pos` is one of the candidate categories
    pub fn is_candidate_pos(&self, pos: PosTag) -> bool {
        self.candidate_pos.contains(&pos)
    }
}
