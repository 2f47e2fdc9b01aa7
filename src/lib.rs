//! # textrank-keywords
//!
//! TextRank keyword extraction over pre-annotated text.
//!
//! Candidate words (selected by part-of-speech, stopwords removed) become the
//! nodes of an undirected co-occurrence graph built from a sliding window over
//! each sentence. A damped power iteration weights the nodes, and the words are
//! returned ordered by weight.
//!
//! Tokenization and tagging are out of scope: input arrives as annotated
//! sentences, either directly, from a caller-supplied [`Annotator`], or as a
//! JSON document (see [`analyze_json`]).
//!
//! ## Quick start
//!
//! ```rust
//! use textrank_keywords::{extract_keywords, AnnotatedToken, PosTag, TextRankConfig};
//!
//! let sentences = vec![
//!     vec![
//!         AnnotatedToken::new("Rust", PosTag::ProperNoun),
//!         AnnotatedToken::new("is", PosTag::Auxiliary),
//!         AnnotatedToken::new("a", PosTag::Determiner),
//!         AnnotatedToken::new("systems", PosTag::Noun),
//!         AnnotatedToken::new("language", PosTag::Noun),
//!     ],
//!     vec![
//!         AnnotatedToken::new("Rust", PosTag::ProperNoun),
//!         AnnotatedToken::new("compiles", PosTag::Verb),
//!         AnnotatedToken::new("programs", PosTag::Noun),
//!     ],
//! ];
//!
//! let analysis = extract_keywords(&sentences, &TextRankConfig::default()).unwrap();
//! for keyword in analysis.get_keywords(3) {
//!     println!("{}: {:.4}", keyword.word, keyword.weight);
//! }
//! assert_eq!(analysis.get_keywords(1)[0].word, "Rust");
//! ```

#[macro_use]
mod macros;

pub mod annotator;
pub mod error;
pub mod extractor;
pub mod graph;
pub mod keywords;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod types;

pub use annotator::{Annotator, AnnotatorSettings};
pub use error::{ConfigError, ErrorCode, KeywordError, Result};
pub use extractor::KeywordExtractor;
pub use pagerank::IterationState;
pub use pipeline::artifacts::KeywordAnalysis;
pub use pipeline::request::AnalysisRequest;
pub use types::{AnnotatedSentence, AnnotatedToken, PosTag, RankedKeyword, TextRankConfig};

/// Validate `config` and rank the candidates of `sentences`.
pub fn extract_keywords(
    sentences: &[AnnotatedSentence],
    config: &TextRankConfig,
) -> Result<KeywordAnalysis> {
    pipeline::validation::validate_config(config)?;
    Ok(pipeline::runner::TextRankPipeline::textrank().run(
        sentences,
        config,
        &mut pipeline::observer::NoopObserver,
    ))
}

/// Parse an [`AnalysisRequest`] document, validate it and analyze it.
///
/// ```rust
/// let json = r#"{
///     "config": { "window_size": 2 },
///     "sentences": [[
///         { "text": "graph", "pos": "NOUN" },
///         { "text": "ranking", "pos": "NOUN" }
///     ]]
/// }"#;
/// let analysis = textrank_keywords::analyze_json(json).unwrap();
/// assert_eq!(analysis.len(), 2);
/// ```
pub fn analyze_json(json: &str) -> Result<KeywordAnalysis> {
    let request = AnalysisRequest::from_json(json)?;
    request.validate().into_result()?;
    Ok(pipeline::runner::TextRankPipeline::textrank().run(
        &request.sentences,
        &request.config,
        &mut pipeline::observer::NoopObserver,
    ))
}
