//! Windowed co-occurrence pairs
//!
//! Pairs are formed forward inside each sentence: position `i` pairs with
//! every `j` in `i + 1 .. min(i + window, len)`. Windows never cross sentence
//! boundaries.

use rustc_hash::FxHashSet;

/// An ordered pair of node IDs as first produced by the window scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenPair {
    /// ID of the word at the earlier position
    pub first: u32,
    /// ID of the word at the later position
    pub second: u32,
}

impl TokenPair {
    pub fn new(first: u32, second: u32) -> Self {
        Self { first, second }
    }
}

/// Collect the distinct co-occurrence pairs of the encoded sentences.
///
/// Dedup is order-sensitive: `(a, b)` and `(b, a)` are different pairs, and
/// each is kept once in first-seen order. A word paired with itself produces
/// nothing.
pub fn cooccurrence_pairs<S: AsRef<[u32]>>(sentences: &[S], window_size: usize) -> Vec<TokenPair> {
    let mut seen: FxHashSet<TokenPair> = FxHashSet::default();
    let mut pairs = Vec::new();

    for sentence in sentences {
        let ids = sentence.as_ref();
        for (i, &first) in ids.iter().enumerate() {
            let end = i.saturating_add(window_size).min(ids.len());
            for &second in &ids[i + 1..end.max(i + 1)] {
                if first == second {
                    continue;
                }
                let pair = TokenPair::new(first, second);
                if seen.insert(pair) {
                    pairs.push(pair);
                }
            }
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_tokens_window_three() {
        // [A, B, C]
        let pairs = cooccurrence_pairs(&[vec![0, 1, 2]], 3);
        assert_eq!(
            pairs,
            vec![TokenPair::new(0, 1), TokenPair::new(0, 2), TokenPair::new(1, 2)]
        );
    }

    #[test]
    fn test_window_two_only_adjacent() {
        let pairs = cooccurrence_pairs(&[vec![0, 1, 2, 3]], 2);
        assert_eq!(
            pairs,
            vec![TokenPair::new(0, 1), TokenPair::new(1, 2), TokenPair::new(2, 3)]
        );
    }

    #[test]
    fn test_window_larger_than_sentence() {
        let pairs = cooccurrence_pairs(&[vec![0, 1]], 10);
        assert_eq!(pairs, vec![TokenPair::new(0, 1)]);
    }

    #[test]
    fn test_unbounded_window_matches_sentence_length() {
        let sentence = vec![vec![0, 1, 2, 3]];
        let unbounded = cooccurrence_pairs(&sentence, usize::MAX);
        assert_eq!(unbounded, cooccurrence_pairs(&sentence, 4));
        assert_eq!(unbounded.len(), 6);
    }

    #[test]
    fn test_no_cross_sentence_pairs() {
        let pairs = cooccurrence_pairs(&[vec![0, 1], vec![2, 3]], 4);
        assert_eq!(pairs, vec![TokenPair::new(0, 1), TokenPair::new(2, 3)]);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let pairs = cooccurrence_pairs(&[vec![0, 1], vec![2], vec![0, 1]], 3);
        assert_eq!(pairs, vec![TokenPair::new(0, 1)]);
    }

    #[test]
    fn test_dedup_is_order_sensitive() {
        let pairs = cooccurrence_pairs(&[vec![0, 1], vec![1, 0]], 2);
        assert_eq!(pairs, vec![TokenPair::new(0, 1), TokenPair::new(1, 0)]);
    }

    #[test]
    fn test_self_pairs_skipped() {
        // [A, A, B]
        let pairs = cooccurrence_pairs(&[vec![0, 0, 1]], 3);
        assert_eq!(pairs, vec![TokenPair::new(0, 1)]);
    }

    #[test]
    fn test_empty_and_single_token_sentences() {
        let empty: Vec<Vec<u32>> = vec![vec![], vec![5]];
        assert!(cooccurrence_pairs(&empty, 4).is_empty());
    }
}
