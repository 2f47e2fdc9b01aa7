//! Co-occurrence graph construction
//!
//! Pairs become unit entries of a directed-looking matrix, which is then
//! symmetrized and column-normalized into the transition matrix the ranker
//! iterates over.

use super::cooccurrence::{cooccurrence_pairs, TokenPair};
use super::matrix::DenseMatrix;
use super::vocabulary::Vocabulary;

/// The graph of one analysis run
#[derive(Debug, Clone)]
pub struct CooccurrenceGraph {
    /// Symmetric adjacency with zero diagonal, before normalization
    adjacency: DenseMatrix,
    /// Column-normalized adjacency
    transition: DenseMatrix,
    /// Distinct pairs the graph was built from
    num_pairs: usize,
}

impl CooccurrenceGraph {
    /// Build from pairs over a vocabulary of `num_nodes` words.
    ///
    /// Pairs referencing IDs outside `0..num_nodes` are ignored.
    pub fn from_pairs(num_nodes: usize, pairs: &[TokenPair]) -> Self {
        let mut directed = DenseMatrix::zeros(num_nodes);
        let mut num_pairs = 0;
        for pair in pairs {
            let (a, b) = (pair.first as usize, pair.second as usize);
            if a < num_nodes && b < num_nodes {
                directed.set(a, b, 1.0);
                num_pairs += 1;
            }
        }

        let adjacency = directed.symmetrized();
        let mut transition = adjacency.clone();
        transition.normalize_columns();

        Self {
            adjacency,
            transition,
            num_pairs,
        }
    }

    /// Build straight from encoded sentences.
    pub fn from_sentences<S: AsRef<[u32]>>(
        vocab: &Vocabulary,
        sentences: &[S],
        window_size: usize,
    ) -> Self {
        let pairs = cooccurrence_pairs(sentences, window_size);
        Self::from_pairs(vocab.len(), &pairs)
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.dim()
    }

    /// Undirected edges (each counted once)
    pub fn num_edges(&self) -> usize {
        self.adjacency.nnz() / 2
    }

    pub fn num_pairs(&self) -> usize {
        self.num_pairs
    }

    pub fn adjacency(&self) -> &DenseMatrix {
        &self.adjacency
    }

    pub fn transition(&self) -> &DenseMatrix {
        &self.transition
    }

    /// Nodes whose transition column is all zero
    pub fn isolated_nodes(&self) -> Vec<u32> {
        self.adjacency
            .column_sums()
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == 0.0)
            .map(|(i, _)| i as u32)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.num_nodes() == 0
    }
}

impl Default for CooccurrenceGraph {
    fn default() -> Self {
        Self::from_pairs(0, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|s| s.iter().map(|w| w.to_string()).collect())
            .collect()
    }

    fn build(raw: &[&[&str]], window: usize) -> (Vocabulary, CooccurrenceGraph) {
        let sentences = words(raw);
        let vocab = Vocabulary::from_sentences(&sentences);
        let encoded = vocab.encode(&sentences);
        let graph = CooccurrenceGraph::from_sentences(&vocab, &encoded, window);
        (vocab, graph)
    }

    #[test]
    fn test_triangle() {
        let (_, graph) = build(&[&["a", "b", "c"]], 3);

        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_edges(), 3);
        assert!(graph.adjacency().is_symmetric());
        for col in 0..3 {
            for row in 0..3 {
                let expected = if row == col { 0.0 } else { 0.5 };
                assert!((graph.transition().get(row, col) - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_zero_diagonal_with_repeated_words() {
        let (vocab, graph) = build(&[&["hope", "people", "hope", "hope"]], 4);

        assert_eq!(vocab.len(), 2);
        for i in 0..graph.num_nodes() {
            assert_eq!(graph.adjacency().get(i, i), 0.0);
        }
        assert!(graph.adjacency().is_symmetric());
    }

    #[test]
    fn test_reversed_pair_across_sentences_doubles_weight() {
        let (_, graph) = build(&[&["a", "b"], &["b", "a"]], 2);
        assert_eq!(graph.num_pairs(), 2);
        assert_eq!(graph.adjacency().get(0, 1), 2.0);
        assert_eq!(graph.adjacency().get(1, 0), 2.0);
        assert_eq!(graph.num_edges(), 1);
        // Normalization still gives a stochastic column
        assert!((graph.transition().get(1, 0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_column_sums_are_one_or_zero() {
        let (_, graph) = build(
            &[&["war", "peace", "hope"], &["island"], &["hope", "country", "war", "people"]],
            3,
        );

        let sums = graph.transition().column_sums();
        for (i, sum) in sums.iter().enumerate() {
            if graph.isolated_nodes().contains(&(i as u32)) {
                assert_eq!(*sum, 0.0);
            } else {
                assert!((sum - 1.0).abs() < 1e-12);
            }
        }
        assert_eq!(graph.isolated_nodes(), vec![3]);
    }

    #[test]
    fn test_no_cross_sentence_edges() {
        let (vocab, graph) = build(&[&["machine", "learning"], &["deep", "neural"]], 4);
        let learning = vocab.get("learning").unwrap() as usize;
        let deep = vocab.get("deep").unwrap() as usize;
        assert_eq!(graph.adjacency().get(learning, deep), 0.0);
    }

    #[test]
    fn test_single_node_graph() {
        let (_, graph) = build(&[&["alone"]], 4);
        assert_eq!(graph.num_nodes(), 1);
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.transition().get(0, 0), 0.0);
        assert_eq!(graph.isolated_nodes(), vec![0]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = CooccurrenceGraph::default();
        assert!(graph.is_empty());
        assert_eq!(graph.num_edges(), 0);
        assert!(graph.isolated_nodes().is_empty());
    }

    #[test]
    fn test_out_of_range_pairs_ignored() {
        let graph = CooccurrenceGraph::from_pairs(2, &[TokenPair::new(0, 1), TokenPair::new(0, 9)]);
        assert_eq!(graph.num_pairs(), 1);
        assert_eq!(graph.num_edges(), 1);
    }
}
