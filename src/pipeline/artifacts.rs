//! Pipeline artifacts.
//!
//! Typed intermediate results flowing between stages, and the
//! [`KeywordAnalysis`] handed back to the caller.

use serde::Serialize;

use crate::graph::vocabulary::Vocabulary;
use crate::keywords::ranker::{rank_keywords, top_n};
use crate::nlp::filter::CandidateSentences;
use crate::pagerank::{IterationState, RankOutput};
use crate::types::RankedKeyword;

/// Candidates selected for graph construction, with their vocabulary.
///
/// `encoded` mirrors `sentences` word for word, with each word replaced by its
/// vocabulary ID.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    pub sentences: CandidateSentences,
    pub vocabulary: Vocabulary,
    pub encoded: Vec<Vec<u32>>,
}

impl CandidateSet {
    pub fn from_sentences(sentences: CandidateSentences) -> Self {
        let vocabulary = Vocabulary::from_sentences(&sentences);
        let encoded = vocabulary.encode(&sentences);
        Self {
            sentences,
            vocabulary,
            encoded,
        }
    }

    /// Total candidate occurrences across sentences
    pub fn num_tokens(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}

/// Outcome of one analysis: every vocabulary word ranked by weight, plus run
/// metadata.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordAnalysis {
    keywords: Vec<RankedKeyword>,
    top_n: usize,
    pub iterations: usize,
    pub state: IterationState,
    /// Change of the weight sum at the last step
    pub residual: f64,
    pub num_nodes: usize,
    pub num_edges: usize,
}

impl KeywordAnalysis {
    pub(crate) fn new(
        vocabulary: &Vocabulary,
        rank: &RankOutput,
        num_edges: usize,
        top_n: usize,
    ) -> Self {
        Self {
            keywords: rank_keywords(vocabulary, &rank.scores),
            top_n,
            iterations: rank.iterations,
            state: rank.state,
            residual: rank.delta,
            num_nodes: vocabulary.len(),
            num_edges,
        }
    }

    /// The `n` highest-weighted keywords (fewer when the vocabulary is smaller)
    pub fn get_keywords(&self, n: usize) -> &[RankedKeyword] {
        top_n(&self.keywords, n)
    }

    /// The configured number of top keywords
    pub fn keywords(&self) -> &[RankedKeyword] {
        self.get_keywords(self.top_n)
    }

    /// Every vocabulary word, ranked
    pub fn all_keywords(&self) -> &[RankedKeyword] {
        &self.keywords
    }

    /// Weight of `word`, if it is in the vocabulary
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.keywords
            .iter()
            .find(|k| k.word == word)
            .map(|k| k.weight)
    }

    pub fn converged(&self) -> bool {
        self.state == IterationState::Converged
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(raw: &[&[&str]]) -> CandidateSentences {
        raw.iter()
            .map(|s| s.iter().map(|w| w.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_candidate_set() {
        let set = CandidateSet::from_sentences(words(&[&["a", "b"], &[], &["b", "c"]]));
        assert_eq!(set.vocabulary.len(), 3);
        assert_eq!(set.encoded, vec![vec![0, 1], vec![], vec![1, 2]]);
        assert_eq!(set.num_tokens(), 4);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_analysis_accessors() {
        let set = CandidateSet::from_sentences(words(&[&["a", "b", "c"]]));
        let rank = RankOutput::new(vec![0.2, 0.9, 0.4], 4, 1e-6, IterationState::Converged);
        let analysis = KeywordAnalysis::new(&set.vocabulary, &rank, 2, 2);

        assert_eq!(analysis.len(), 3);
        assert_eq!(analysis.keywords().len(), 2);
        assert_eq!(analysis.keywords()[0].word, "b");
        assert_eq!(analysis.get_keywords(1)[0].word, "b");
        assert_eq!(analysis.weight("c"), Some(0.4));
        assert_eq!(analysis.weight("zzz"), None);
        assert!(analysis.converged());
        assert_eq!(analysis.num_edges, 2);
    }

    #[test]
    fn test_empty_analysis() {
        let rank = RankOutput::new(vec![], 1, 0.0, IterationState::Converged);
        let analysis = KeywordAnalysis::new(&Vocabulary::new(), &rank, 0, 10);
        assert!(analysis.is_empty());
        assert!(analysis.get_keywords(5).is_empty());
        assert!(analysis.keywords().is_empty());
    }

    #[test]
    fn test_analysis_serializes() {
        let set = CandidateSet::from_sentences(words(&[&["hope"]]));
        let rank = RankOutput::new(vec![0.15], 2, 0.0, IterationState::Converged);
        let json = serde_json::to_value(KeywordAnalysis::new(&set.vocabulary, &rank, 0, 10)).unwrap();
        assert_eq!(json["keywords"][0]["word"], "hope");
        assert_eq!(json["state"], "converged");
    }
}
