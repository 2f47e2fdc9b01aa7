//! Damped power iteration
//!
//! Weights start at 1 and are updated as `w = (1 - d) + d * (G · w)` where `G`
//! is the column-normalized co-occurrence matrix. Iteration stops when the sum
//! of the weights moves less than the threshold between two steps, or when the
//! step cap is reached. Weights are not renormalized at the end.

use super::{IterationState, RankOutput};
use crate::graph::builder::CooccurrenceGraph;
use crate::types::TextRankConfig;

#[derive(Debug, Clone)]
pub struct PowerIteration {
    /// Damping coefficient (typically 0.85)
    pub damping: f64,
    /// Step cap
    pub max_iterations: usize,
    /// Convergence threshold on the change of the weight sum
    pub threshold: f64,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 10,
            threshold: 1e-5,
        }
    }
}

impl PowerIteration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(cfg: &TextRankConfig) -> Self {
        Self {
            damping: cfg.damping,
            max_iterations: cfg.max_iterations,
            threshold: cfg.convergence_threshold,
        }
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Rank the nodes of `graph`.
    ///
    /// Never fails: running out of steps is reported as
    /// [`IterationState::Exhausted`] with the last step's weights.
    pub fn run(&self, graph: &CooccurrenceGraph) -> RankOutput {
        let n = graph.num_nodes();
        let transition = graph.transition();
        let baseline = 1.0 - self.damping;

        let mut scores = vec![1.0; n];
        let mut previous_sum = 0.0;
        let mut delta = 0.0;
        let mut iterations = 0;
        let mut state = IterationState::Initialized;

        while !state.is_terminal() {
            if iterations == self.max_iterations {
                state = IterationState::Exhausted;
                break;
            }
            iterations += 1;
            state = IterationState::Iterating;

            scores = transition
                .mul_vec(&scores)
                .into_iter()
                .map(|propagated| baseline + self.damping * propagated)
                .collect();

            let sum: f64 = scores.iter().sum();
            delta = (sum - previous_sum).abs();
            if delta < self.threshold {
                state = IterationState::Converged;
            } else {
                previous_sum = sum;
            }
        }

        RankOutput::new(scores, iterations, delta, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::cooccurrence::TokenPair;

    fn triangle() -> CooccurrenceGraph {
        CooccurrenceGraph::from_pairs(
            3,
            &[TokenPair::new(0, 1), TokenPair::new(1, 2), TokenPair::new(0, 2)],
        )
    }

    fn star() -> CooccurrenceGraph {
        // Hub 0 connected to three spokes
        CooccurrenceGraph::from_pairs(
            4,
            &[TokenPair::new(0, 1), TokenPair::new(0, 2), TokenPair::new(0, 3)],
        )
    }

    #[test]
    fn test_single_node_converges_to_baseline() {
        let graph = CooccurrenceGraph::from_pairs(1, &[]);
        let result = PowerIteration::new().run(&graph);

        assert!(result.converged());
        assert_eq!(result.scores.len(), 1);
        assert!((result.scores[0] - 0.15).abs() < 1e-12);
        // First step moves the sum from 0 to 0.15, the second confirms it
        assert_eq!(result.iterations, 2);
    }

    #[test]
    fn test_triangle_fixed_point() {
        // Every column of the triangle sums to one, so w = 1 is a fixed point
        let result = PowerIteration::new().run(&triangle());

        assert!(result.converged());
        for score in &result.scores {
            assert!((score - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_star_hub_highest() {
        let result = PowerIteration::new().run(&star());

        let hub = result.score(0);
        for spoke in 1..4 {
            assert!(hub > result.score(spoke));
        }
    }

    #[test]
    fn test_first_step_of_star() {
        let result = PowerIteration::new().with_max_iterations(1).run(&star());

        // Hub: 0.15 + 0.85 * 3 ; spokes: 0.15 + 0.85 * (1/3)
        assert!((result.scores[0] - (0.15 + 0.85 * 3.0)).abs() < 1e-12);
        assert!((result.scores[1] - (0.15 + 0.85 / 3.0)).abs() < 1e-12);
        assert_eq!(result.state, IterationState::Exhausted);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_exhausted_returns_last_weights() {
        let result = PowerIteration::new()
            .with_max_iterations(3)
            .with_threshold(0.0)
            .run(&star());

        assert_eq!(result.iterations, 3);
        assert_eq!(result.state, IterationState::Exhausted);
        assert!(!result.converged());
        assert_eq!(result.scores.len(), 4);
        assert!(result.scores.iter().all(|s| s.is_finite() && *s >= 0.0));
    }

    #[test]
    fn test_zero_step_cap() {
        let result = PowerIteration::new().with_max_iterations(0).run(&triangle());
        assert_eq!(result.iterations, 0);
        assert_eq!(result.state, IterationState::Exhausted);
        assert_eq!(result.scores, vec![1.0; 3]);
    }

    #[test]
    fn test_empty_graph() {
        let result = PowerIteration::new().run(&CooccurrenceGraph::default());
        assert!(result.scores.is_empty());
        assert!(result.converged());
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_isolated_node_keeps_baseline() {
        let graph = CooccurrenceGraph::from_pairs(3, &[TokenPair::new(0, 1)]);
        let result = PowerIteration::new().run(&graph);
        assert!((result.score(2) - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_deterministic() {
        let a = PowerIteration::new().run(&star());
        let b = PowerIteration::new().run(&star());
        assert_eq!(a.scores, b.scores);
        assert_eq!(a.iterations, b.iterations);
    }
}
