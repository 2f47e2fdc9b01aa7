//! Final keyword ordering

use crate::graph::vocabulary::Vocabulary;
use crate::types::RankedKeyword;

/// Pair every vocabulary word with its weight and sort by descending weight.
///
/// The sort is stable, so equal weights keep vocabulary (first-seen) order.
pub fn rank_keywords(vocab: &Vocabulary, scores: &[f64]) -> Vec<RankedKeyword> {
    let mut ranked: Vec<RankedKeyword> = vocab
        .words()
        .iter()
        .zip(scores)
        .map(|(word, &weight)| RankedKeyword::new(word.as_str(), weight))
        .collect();
    ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    ranked
}

/// The first `n` entries of an already ranked list (all of them if shorter)
pub fn top_n(ranked: &[RankedKeyword], n: usize) -> &[RankedKeyword] {
    &ranked[..n.min(ranked.len())]
}
