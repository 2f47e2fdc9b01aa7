//! Stage trait definitions for the pipeline.
//!
//! Each trait is one processing stage boundary. Implementations are
//! statically dispatched; every trait is also object safe for callers who
//! want to compose stages at runtime.

use crate::graph::builder::CooccurrenceGraph;
use crate::nlp::filter::select_all;
use crate::nlp::stopwords::StopwordFilter;
use crate::pagerank::power::PowerIteration;
use crate::pagerank::RankOutput;
use crate::pipeline::artifacts::CandidateSet;
use crate::types::{AnnotatedSentence, TextRankConfig};

// ============================================================================
// Preprocessor: token normalization before selection (stage 0)
// ============================================================================

/// Preprocessing stage.
///
/// Works on the run's private copy of the annotated sentences; the caller's
/// input is never modified. Must be idempotent.
pub trait Preprocessor {
    fn preprocess(&self, sentences: &mut [AnnotatedSentence], cfg: &TextRankConfig);
}

/// Passes sentences through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPreprocessor;

impl Preprocessor for NoopPreprocessor {
    #[inline]
    fn preprocess(&self, _sentences: &mut [AnnotatedSentence], _cfg: &TextRankConfig) {}
}

/// Marks tokens listed in `cfg.extra_stopwords`. The default preprocessor.
///
/// Every other token keeps the `is_stopword` flag the annotator gave it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtraStopwordPreprocessor;

impl Preprocessor for ExtraStopwordPreprocessor {
    fn preprocess(&self, sentences: &mut [AnnotatedSentence], cfg: &TextRankConfig) {
        #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
        let marked = StopwordFilter::from_list(&cfg.extra_stopwords).apply(sentences);
        trace_debug!(marked, "extra stopwords applied");
    }
}

/// Marks tokens found in the merged stopword set (base language list plus
/// `extra_stopwords`).
///
/// This re-classifies annotated tokens with the `stop-words` lists, so it only
/// suits annotators that don't flag stopwords themselves. Opt in through
/// [`crate::pipeline::runner::PipelineBuilder::preprocessor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StopwordPreprocessor;

impl Preprocessor for StopwordPreprocessor {
    fn preprocess(&self, sentences: &mut [AnnotatedSentence], cfg: &TextRankConfig) {
        #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
        let marked = StopwordFilter::from_config(cfg).apply(sentences);
        trace_debug!(marked, "stopword overlay applied");
    }
}

// ============================================================================
// CandidateSelector: token filter + vocabulary (stage 1)
// ============================================================================

pub trait CandidateSelector {
    fn select(&self, sentences: &[AnnotatedSentence], cfg: &TextRankConfig) -> CandidateSet;
}

/// Keeps non-stopword tokens whose POS is in `cfg.candidate_pos`,
/// lower-cased when `cfg.lowercase` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosCandidateSelector;

impl CandidateSelector for PosCandidateSelector {
    fn select(&self, sentences: &[AnnotatedSentence], cfg: &TextRankConfig) -> CandidateSet {
        CandidateSet::from_sentences(select_all(sentences, &cfg.candidate_pos, cfg.lowercase))
    }
}

// ============================================================================
// GraphBuilder (stage 2)
// ============================================================================

pub trait GraphBuilder {
    fn build(&self, candidates: &CandidateSet, cfg: &TextRankConfig) -> CooccurrenceGraph;
}

/// Sentence-bounded sliding-window co-occurrence graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct CooccurrenceGraphBuilder;

impl GraphBuilder for CooccurrenceGraphBuilder {
    fn build(&self, candidates: &CandidateSet, cfg: &TextRankConfig) -> CooccurrenceGraph {
        CooccurrenceGraph::from_sentences(
            &candidates.vocabulary,
            &candidates.encoded,
            cfg.window_size,
        )
    }
}

// ============================================================================
// Ranker (stage 3)
// ============================================================================

pub trait Ranker {
    fn rank(&self, graph: &CooccurrenceGraph, cfg: &TextRankConfig) -> RankOutput;
}

/// Damped power iteration with the config's damping, threshold and step cap.
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerIterationRanker;

impl Ranker for PowerIterationRanker {
    fn rank(&self, graph: &CooccurrenceGraph, cfg: &TextRankConfig) -> RankOutput {
        PowerIteration::from_config(cfg).run(graph)
    }
}
